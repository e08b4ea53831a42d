use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use domain::error::Result;
use domain::farm::{Farm, FarmRepository};
use domain::query::{FarmFilter, Page, PageRequest};
use domain::scope::{EntityKind, FarmScope};
use domain::screen::EMPLOYEE_STATS_SCREEN;
use domain::stats::{EmployeeStatsRepository, EmploymentType, FarmEmployeeStats};
use domain::user::User;
use domain::DomainError;

/// Writable payroll-stats fields. The two totals are absent on
/// purpose: they are pure outputs of the recompute step.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeStatsDraft {
    pub farm_id: i32,
    pub reporting_month: NaiveDate,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub citizen_male: i32,
    #[serde(default)]
    pub citizen_female: i32,
    #[serde(default)]
    pub expatriate_male: i32,
    #[serde(default)]
    pub expatriate_female: i32,
    #[serde(default)]
    pub basic_pay_usd: Decimal,
    #[serde(default)]
    pub basic_pay_zwl: Decimal,
    #[serde(default)]
    pub employees_contribution_usd: Decimal,
    #[serde(default)]
    pub employees_contribution_zwl: Decimal,
    #[serde(default)]
    pub employers_contribution_usd: Decimal,
    #[serde(default)]
    pub employers_contribution_zwl: Decimal,
    #[serde(default)]
    pub arrears_usd: Decimal,
    #[serde(default)]
    pub arrears_zwl: Decimal,
}

pub struct EmployeeStatsService {
    repo: Arc<dyn EmployeeStatsRepository>,
    farms: Arc<dyn FarmRepository>,
}

impl EmployeeStatsService {
    pub fn new(repo: Arc<dyn EmployeeStatsRepository>, farms: Arc<dyn FarmRepository>) -> Self {
        Self { repo, farms }
    }

    pub async fn list(
        &self,
        user: &User,
        farm_filter: Option<&str>,
        page: u64,
    ) -> Result<Page<FarmEmployeeStats>> {
        let scope = FarmScope::resolve(user, EntityKind::FarmEmployeeStats);
        let filter = FarmFilter::parse(farm_filter);
        self.repo
            .list(
                &scope,
                filter,
                PageRequest::new(page, EMPLOYEE_STATS_SCREEN.page_size),
            )
            .await
    }

    pub async fn get(&self, id: i32) -> Result<FarmEmployeeStats> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("employee stats {id}")))
    }

    /// Farms the acting user may report stats against. Empty for roles
    /// outside {Manager, Admin} - the soft-deny.
    pub async fn farm_choices(&self, user: &User) -> Result<Vec<Farm>> {
        let scope = FarmScope::resolve(user, EntityKind::FarmEmployeeStats);
        self.farms.list_all(&scope).await
    }

    pub async fn create(&self, acting: &User, draft: EmployeeStatsDraft) -> Result<FarmEmployeeStats> {
        self.check_farm_choice(acting, draft.farm_id).await?;

        let now = Utc::now();
        let mut stats = Self::apply_draft(
            FarmEmployeeStats {
                id: 0,
                farm_id: draft.farm_id,
                reporting_month: draft.reporting_month,
                employment_type: draft.employment_type,
                citizen_male: 0,
                citizen_female: 0,
                expatriate_male: 0,
                expatriate_female: 0,
                basic_pay_usd: Decimal::ZERO,
                basic_pay_zwl: Decimal::ZERO,
                employees_contribution_usd: Decimal::ZERO,
                employees_contribution_zwl: Decimal::ZERO,
                employers_contribution_usd: Decimal::ZERO,
                employers_contribution_zwl: Decimal::ZERO,
                arrears_usd: Decimal::ZERO,
                arrears_zwl: Decimal::ZERO,
                total_contribution_usd: Decimal::ZERO,
                total_contribution_zwl: Decimal::ZERO,
                created_by: None,
                created: now,
                updated: now,
            },
            &draft,
        );

        stats.validate().map_err(DomainError::Validation)?;
        stats.recompute();
        // First write wins
        stats.created_by = Some(acting.id);

        let stats = self.repo.insert(stats).await?;
        tracing::info!(
            stats_id = stats.id,
            farm_id = stats.farm_id,
            employment_type = stats.employment_type.as_str(),
            "Employee stats created"
        );
        Ok(stats)
    }

    pub async fn update(
        &self,
        acting: &User,
        id: i32,
        draft: EmployeeStatsDraft,
    ) -> Result<FarmEmployeeStats> {
        self.check_farm_choice(acting, draft.farm_id).await?;

        let existing = self.get(id).await?;
        let created_by = existing.created_by;

        let mut stats = Self::apply_draft(existing, &draft);
        stats.farm_id = draft.farm_id;
        stats.reporting_month = draft.reporting_month;
        stats.employment_type = draft.employment_type;
        stats.updated = Utc::now();

        stats.validate().map_err(DomainError::Validation)?;
        stats.recompute();
        // created_by is never overwritten once set
        stats.created_by = created_by.or(Some(acting.id));

        self.repo.update(stats).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await
    }

    /// The target farm must lie in the acting user's choice set. Roles
    /// outside {Manager, Admin} have an empty choice set, so the write
    /// is refused rather than the record silently mis-scoped.
    async fn check_farm_choice(&self, acting: &User, farm_id: i32) -> Result<()> {
        let scope = FarmScope::resolve(acting, EntityKind::FarmEmployeeStats);
        let farm = self
            .farms
            .find_by_id(farm_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("farm {farm_id}")))?;
        if !scope.allows_owner(farm.owner_id) {
            return Err(DomainError::Forbidden(format!(
                "farm {farm_id} is not in your farm choice set"
            )));
        }
        Ok(())
    }

    fn apply_draft(mut stats: FarmEmployeeStats, draft: &EmployeeStatsDraft) -> FarmEmployeeStats {
        stats.citizen_male = draft.citizen_male;
        stats.citizen_female = draft.citizen_female;
        stats.expatriate_male = draft.expatriate_male;
        stats.expatriate_female = draft.expatriate_female;
        stats.basic_pay_usd = draft.basic_pay_usd;
        stats.basic_pay_zwl = draft.basic_pay_zwl;
        stats.employees_contribution_usd = draft.employees_contribution_usd;
        stats.employees_contribution_zwl = draft.employees_contribution_zwl;
        stats.employers_contribution_usd = draft.employers_contribution_usd;
        stats.employers_contribution_zwl = draft.employers_contribution_zwl;
        stats.arrears_usd = draft.arrears_usd;
        stats.arrears_zwl = draft.arrears_zwl;
        stats
    }
}
