use crate::error::Result;
use crate::notice::Notice;
use crate::query::{Page, PageRequest};
use async_trait::async_trait;

/// Repository interface for Notice persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Insert a new notice, returning it with its assigned id
    async fn insert(&self, notice: Notice) -> Result<Notice>;

    /// Update an existing notice
    async fn update(&self, notice: Notice) -> Result<Notice>;

    /// Find notice by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Notice>>;

    /// List notices, newest first (unscoped)
    async fn list(&self, page: PageRequest) -> Result<Page<Notice>>;

    /// Most recently created active notices
    async fn active_recent(&self, limit: u64) -> Result<Vec<Notice>>;

    /// Delete notice by id
    async fn delete(&self, id: i32) -> Result<()>;
}
