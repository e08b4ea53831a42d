use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use domain::error::Result;
use domain::query::{Page, PageRequest};
use domain::screen::USER_PAGE_SIZE;
use domain::user::{Role, User, UserRepository};
use domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct UserDraft {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, page: u64) -> Result<Page<User>> {
        self.repo.list(PageRequest::new(page, USER_PAGE_SIZE)).await
    }

    pub async fn get(&self, id: i32) -> Result<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }

    pub async fn create(&self, draft: UserDraft) -> Result<User> {
        let now = Utc::now();
        let user = User {
            id: 0,
            username: draft.username,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            role: draft.role,
            created: now,
            updated: now,
        };
        let user = self.repo.insert(user).await?;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "User created");
        Ok(user)
    }

    pub async fn update(&self, id: i32, draft: UserDraft) -> Result<User> {
        let mut user = self.get(id).await?;
        user.username = draft.username;
        user.first_name = draft.first_name;
        user.last_name = draft.last_name;
        user.email = draft.email;
        user.role = draft.role;
        user.updated = Utc::now();
        self.repo.update(user).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted (owned farms cascade)");
        Ok(())
    }
}
