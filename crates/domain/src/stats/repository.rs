use crate::error::Result;
use crate::query::{FarmFilter, Page, PageRequest};
use crate::scope::FarmScope;
use crate::stats::FarmEmployeeStats;
use async_trait::async_trait;

/// Repository interface for FarmEmployeeStats persistence
///
/// Implementations must surface a duplicate
/// (farm, reporting_month, employment_type) as `DomainError::Conflict`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStatsRepository: Send + Sync {
    /// Insert a new stats record, returning it with its assigned id
    async fn insert(&self, stats: FarmEmployeeStats) -> Result<FarmEmployeeStats>;

    /// Update an existing stats record
    async fn update(&self, stats: FarmEmployeeStats) -> Result<FarmEmployeeStats>;

    /// Find stats record by id
    async fn find_by_id(&self, id: i32) -> Result<Option<FarmEmployeeStats>>;

    /// List stats within scope, optionally narrowed to one farm,
    /// newest first
    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<FarmEmployeeStats>>;

    /// Number of stats records within scope
    async fn count(&self, scope: &FarmScope) -> Result<u64>;

    /// Delete stats record by id
    async fn delete(&self, id: i32) -> Result<()>;
}
