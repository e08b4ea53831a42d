//! Application layer - services composing the domain ports
//!
//! Each service wraps the repository traits from the domain crate and
//! enforces the write-side rules: scope resolution before reads,
//! validation and aggregate recomputation before writes.

pub mod dashboard;
pub mod farms;
pub mod notices;
pub mod statements;
pub mod stats;
pub mod users;
pub mod visits;

pub use dashboard::{DashboardCounts, DashboardService, DashboardSummary};
pub use farms::{FarmDraft, FarmService};
pub use notices::{NoticeDraft, NoticeService};
pub use statements::{StatementDraft, StatementService};
pub use stats::{EmployeeStatsDraft, EmployeeStatsService};
pub use users::{UserDraft, UserService};
pub use visits::{SiteVisitDraft, SiteVisitService};
