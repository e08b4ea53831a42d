use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use domain::error::Result;
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::{EntityKind, FarmScope};
use domain::screen::STATEMENT_SCREEN;
use domain::statement::{Statement, StatementRepository};
use domain::user::User;
use domain::DomainError;

/// Writable statement fields. The balance is absent on purpose: it is
/// a derived field, recomputed before every persist.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementDraft {
    pub farm_id: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub total_sales: Decimal,
    #[serde(default)]
    pub total_expenses: Decimal,
}

pub struct StatementService {
    repo: Arc<dyn StatementRepository>,
}

impl StatementService {
    pub fn new(repo: Arc<dyn StatementRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        user: &User,
        farm_filter: Option<&str>,
        page: u64,
    ) -> Result<Page<Statement>> {
        let scope = FarmScope::resolve(user, EntityKind::Statement);
        let filter = FarmFilter::parse(farm_filter);
        self.repo
            .list(
                &scope,
                filter,
                PageRequest::new(page, STATEMENT_SCREEN.page_size),
            )
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Statement> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("statement {id}")))
    }

    pub async fn create(&self, draft: StatementDraft) -> Result<Statement> {
        let now = Utc::now();
        let mut statement = Statement {
            id: 0,
            farm_id: draft.farm_id,
            period_start: draft.period_start,
            period_end: draft.period_end,
            total_sales: draft.total_sales,
            total_expenses: draft.total_expenses,
            balance: Decimal::ZERO,
            created: now,
            updated: now,
        };
        statement.recompute();
        let statement = self.repo.insert(statement).await?;
        tracing::info!(
            statement_id = statement.id,
            farm_id = statement.farm_id,
            "Statement created"
        );
        Ok(statement)
    }

    pub async fn update(&self, id: i32, draft: StatementDraft) -> Result<Statement> {
        let mut statement = self.get(id).await?;
        statement.farm_id = draft.farm_id;
        statement.period_start = draft.period_start;
        statement.period_end = draft.period_end;
        statement.total_sales = draft.total_sales;
        statement.total_expenses = draft.total_expenses;
        statement.updated = Utc::now();
        statement.recompute();
        self.repo.update(statement).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await
    }
}
