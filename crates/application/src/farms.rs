use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;

use domain::error::Result;
use domain::farm::{Farm, FarmRepository, Sector};
use domain::query::{Page, PageRequest};
use domain::scope::{EntityKind, FarmScope};
use domain::screen::FARM_SCREEN;
use domain::user::User;
use domain::DomainError;

/// Writable farm fields. The owner is not part of the draft: it is set
/// to the acting user at creation and preserved on update.
#[derive(Debug, Clone, Deserialize)]
pub struct FarmDraft {
    pub name: String,
    pub address: String,
    pub size_in_hectares: Option<Decimal>,
    #[serde(default)]
    pub telephone: String,
    pub account_number: String,
    #[serde(default)]
    pub email: String,
    pub sector: Sector,
}

pub struct FarmService {
    repo: Arc<dyn FarmRepository>,
}

impl FarmService {
    pub fn new(repo: Arc<dyn FarmRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user: &User, page: u64) -> Result<Page<Farm>> {
        let scope = FarmScope::resolve(user, EntityKind::Farm);
        self.repo
            .list(&scope, PageRequest::new(page, FARM_SCREEN.page_size))
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Farm> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("farm {id}")))
    }

    pub async fn create(&self, acting: &User, draft: FarmDraft) -> Result<Farm> {
        let now = Utc::now();
        let farm = Farm {
            id: 0,
            name: draft.name,
            owner_id: acting.id,
            address: draft.address,
            size_in_hectares: draft.size_in_hectares,
            telephone: draft.telephone,
            account_number: draft.account_number,
            email: draft.email,
            sector: draft.sector,
            created: now,
            updated: now,
        };
        let farm = self.repo.insert(farm).await?;
        tracing::info!(farm_id = farm.id, owner_id = acting.id, "Farm created");
        Ok(farm)
    }

    pub async fn update(&self, id: i32, draft: FarmDraft) -> Result<Farm> {
        let mut farm = self.get(id).await?;
        farm.name = draft.name;
        farm.address = draft.address;
        farm.size_in_hectares = draft.size_in_hectares;
        farm.telephone = draft.telephone;
        farm.account_number = draft.account_number;
        farm.email = draft.email;
        farm.sector = draft.sector;
        farm.updated = Utc::now();
        self.repo.update(farm).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await?;
        tracing::info!(farm_id = id, "Farm deleted (dependents cascade)");
        Ok(())
    }
}
