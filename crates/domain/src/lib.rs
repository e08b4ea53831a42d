//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Farm, SiteVisit, Notice, Statement, FarmEmployeeStats, User)
//! - Value Objects (Role, Sector, VisitStatus, EmploymentType)
//! - The role-scope resolver and aggregate recomputation rules
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod error;
pub mod farm;
pub mod notice;
pub mod query;
pub mod scope;
pub mod screen;
pub mod statement;
pub mod stats;
pub mod user;
pub mod visit;

// Re-export commonly used types
pub use error::{DomainError, FieldError};
pub use farm::{Farm, Sector};
pub use notice::Notice;
pub use query::{FarmFilter, Page, PageRequest};
pub use scope::{EntityKind, FarmScope};
pub use statement::Statement;
pub use stats::{EmploymentType, FarmEmployeeStats};
pub use user::{Role, User};
pub use visit::{SiteVisit, VisitStatus};
