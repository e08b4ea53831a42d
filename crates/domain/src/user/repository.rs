use crate::error::Result;
use crate::query::{Page, PageRequest};
use crate::user::User;
use async_trait::async_trait;

/// Repository interface for User persistence
///
/// Implementations are provided in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, returning it with its assigned id
    async fn insert(&self, user: User) -> Result<User>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User>;

    /// Find user by id
    async fn find_by_id(&self, id: i32) -> Result<Option<User>>;

    /// List users, newest first
    async fn list(&self, page: PageRequest) -> Result<Page<User>>;

    /// Total number of users (the dashboard user count is never scoped)
    async fn count(&self) -> Result<u64>;

    /// Users eligible for site-visit assignment: role == DesignatedAgent,
    /// ordered by first name then last name
    async fn designated_agents(&self) -> Result<Vec<User>>;

    /// Delete user by id. Farms owned by the user are deleted with it;
    /// weak references (visit agent, notice issuer, stats author) are nulled.
    async fn delete(&self, id: i32) -> Result<()>;
}
