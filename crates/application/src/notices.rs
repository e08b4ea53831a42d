use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use domain::error::Result;
use domain::notice::{Notice, NoticeRepository};
use domain::query::{Page, PageRequest};
use domain::screen::NOTICE_SCREEN;
use domain::user::User;
use domain::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub message: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

pub struct NoticeService {
    repo: Arc<dyn NoticeRepository>,
}

impl NoticeService {
    pub fn new(repo: Arc<dyn NoticeRepository>) -> Self {
        Self { repo }
    }

    /// Notices are unscoped: every role sees every notice.
    pub async fn list(&self, page: u64) -> Result<Page<Notice>> {
        self.repo
            .list(PageRequest::new(page, NOTICE_SCREEN.page_size))
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Notice> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("notice {id}")))
    }

    pub async fn create(&self, acting: &User, draft: NoticeDraft) -> Result<Notice> {
        let now = Utc::now();
        let notice = Notice {
            id: 0,
            title: draft.title,
            message: draft.message,
            issued_by: Some(acting.id),
            is_active: draft.is_active,
            created: now,
            updated: now,
        };
        let notice = self.repo.insert(notice).await?;
        tracing::info!(notice_id = notice.id, issued_by = acting.id, "Notice created");
        Ok(notice)
    }

    pub async fn update(&self, id: i32, draft: NoticeDraft) -> Result<Notice> {
        let mut notice = self.get(id).await?;
        notice.title = draft.title;
        notice.message = draft.message;
        notice.is_active = draft.is_active;
        notice.updated = Utc::now();
        self.repo.update(notice).await
    }

    /// Flip the active flag of a notice.
    pub async fn toggle_active(&self, id: i32) -> Result<Notice> {
        let mut notice = self.get(id).await?;
        notice.toggle_active();
        notice.updated = Utc::now();
        let notice = self.repo.update(notice).await?;
        tracing::debug!(notice_id = id, is_active = notice.is_active, "Notice toggled");
        Ok(notice)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await
    }
}
