use crate::error::Result;
use crate::query::{FarmFilter, Page, PageRequest};
use crate::scope::FarmScope;
use crate::statement::Statement;
use async_trait::async_trait;

/// Repository interface for Statement persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatementRepository: Send + Sync {
    /// Insert a new statement, returning it with its assigned id
    async fn insert(&self, statement: Statement) -> Result<Statement>;

    /// Update an existing statement
    async fn update(&self, statement: Statement) -> Result<Statement>;

    /// Find statement by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Statement>>;

    /// List statements within scope, optionally narrowed to one farm,
    /// newest first
    async fn list(
        &self,
        scope: &FarmScope,
        filter: Option<FarmFilter>,
        page: PageRequest,
    ) -> Result<Page<Statement>>;

    /// Most recently created statements within scope
    async fn recent(&self, scope: &FarmScope, limit: u64) -> Result<Vec<Statement>>;

    /// Number of statements within scope
    async fn count(&self, scope: &FarmScope) -> Result<u64>;

    /// Delete statement by id
    async fn delete(&self, id: i32) -> Result<()>;
}
