use crate::error::Result;
use crate::query::{FarmFilter, Page, PageRequest};
use crate::scope::FarmScope;
use crate::visit::SiteVisit;
use async_trait::async_trait;

/// Repository interface for SiteVisit persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteVisitRepository: Send + Sync {
    /// Insert a new site visit, returning it with its assigned id
    async fn insert(&self, visit: SiteVisit) -> Result<SiteVisit>;

    /// Update an existing site visit
    async fn update(&self, visit: SiteVisit) -> Result<SiteVisit>;

    /// Find site visit by id
    async fn find_by_id(&self, id: i32) -> Result<Option<SiteVisit>>;

    /// List visits within scope, optionally narrowed to one farm,
    /// newest first
    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<SiteVisit>>;

    /// Most recent visits within scope, by visit date descending
    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<SiteVisit>>;

    /// Number of visits within scope
    async fn count(&self, scope: &FarmScope) -> Result<u64>;

    /// Delete site visit by id
    async fn delete(&self, id: i32) -> Result<()>;
}
