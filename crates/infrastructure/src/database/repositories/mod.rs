mod sea_orm_farm_repository;
mod sea_orm_notice_repository;
mod sea_orm_statement_repository;
mod sea_orm_stats_repository;
mod sea_orm_user_repository;
mod sea_orm_visit_repository;

pub use sea_orm_farm_repository::SeaOrmFarmRepository;
pub use sea_orm_notice_repository::SeaOrmNoticeRepository;
pub use sea_orm_statement_repository::SeaOrmStatementRepository;
pub use sea_orm_stats_repository::SeaOrmEmployeeStatsRepository;
pub use sea_orm_user_repository::SeaOrmUserRepository;
pub use sea_orm_visit_repository::SeaOrmSiteVisitRepository;

use domain::DomainError;
use sea_orm::{DbErr, SqlErr};

/// Translate a database error into the domain taxonomy. Unique-index
/// violations become conflicts; everything else is a repository fault.
pub(crate) fn map_db_err(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => DomainError::Repository(err.to_string()),
    }
}

pub(crate) fn not_found(what: &str, id: i32) -> DomainError {
    DomainError::NotFound(format!("{what} {id}"))
}
