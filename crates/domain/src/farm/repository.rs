use crate::error::Result;
use crate::farm::Farm;
use crate::query::{Page, PageRequest};
use crate::scope::FarmScope;
use async_trait::async_trait;

/// Repository interface for Farm persistence
///
/// All read operations take the caller's resolved [`FarmScope`]; the
/// implementation translates it into a storage-level filter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FarmRepository: Send + Sync {
    /// Insert a new farm, returning it with its assigned id
    async fn insert(&self, farm: Farm) -> Result<Farm>;

    /// Update an existing farm
    async fn update(&self, farm: Farm) -> Result<Farm>;

    /// Find farm by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Farm>>;

    /// List farms within scope, newest first
    async fn list(&self, scope: &FarmScope, page: PageRequest) -> Result<Page<Farm>>;

    /// All farms within scope, newest first (assignment choice sets)
    async fn list_all(&self, scope: &FarmScope) -> Result<Vec<Farm>>;

    /// The most recently created farms within scope
    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<Farm>>;

    /// Number of farms within scope
    async fn count(&self, scope: &FarmScope) -> Result<u64>;

    /// Delete farm by id. Site visits, statements and employee stats of
    /// the farm are deleted with it.
    async fn delete(&self, id: i32) -> Result<()>;
}
