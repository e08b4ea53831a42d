//! Infrastructure layer - SeaORM persistence and configuration
//!
//! Implements the repository ports declared in the domain crate and
//! owns everything that talks to the outside world: the database
//! schema models, scope-to-SQL translation, and settings loading.

pub mod config;
pub mod database;

pub use config::Settings;
pub use database::repositories::{
    SeaOrmEmployeeStatsRepository, SeaOrmFarmRepository, SeaOrmNoticeRepository,
    SeaOrmSiteVisitRepository, SeaOrmStatementRepository, SeaOrmUserRepository,
};
