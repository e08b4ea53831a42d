use std::sync::Arc;

use serde::Serialize;

use domain::error::Result;
use domain::farm::{Farm, FarmRepository};
use domain::notice::{Notice, NoticeRepository};
use domain::scope::{EntityKind, FarmScope};
use domain::statement::{Statement, StatementRepository};
use domain::stats::EmployeeStatsRepository;
use domain::user::{User, UserRepository};
use domain::visit::{SiteVisit, SiteVisitRepository};

const RECENT_LIMIT: u64 = 5;
const ACTIVE_NOTICE_LIMIT: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCounts {
    pub users: u64,
    pub farms: u64,
    pub site_visits: u64,
    pub statements: u64,
    pub employee_stats: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub counts: DashboardCounts,
    pub recent_farms: Vec<Farm>,
    pub recent_visits: Vec<SiteVisit>,
    pub recent_statements: Vec<Statement>,
    pub active_notices: Vec<Notice>,
}

pub struct DashboardService {
    farms: Arc<dyn FarmRepository>,
    users: Arc<dyn UserRepository>,
    visits: Arc<dyn SiteVisitRepository>,
    statements: Arc<dyn StatementRepository>,
    stats: Arc<dyn EmployeeStatsRepository>,
    notices: Arc<dyn NoticeRepository>,
}

impl DashboardService {
    pub fn new(
        farms: Arc<dyn FarmRepository>,
        users: Arc<dyn UserRepository>,
        visits: Arc<dyn SiteVisitRepository>,
        statements: Arc<dyn StatementRepository>,
        stats: Arc<dyn EmployeeStatsRepository>,
        notices: Arc<dyn NoticeRepository>,
    ) -> Self {
        Self {
            farms,
            users,
            visits,
            statements,
            stats,
            notices,
        }
    }

    /// Top-level counts and recent items for the landing screen.
    ///
    /// The farm scope is resolved once and applied to every count and
    /// recent list except users and notices, which are never farm
    /// scoped. Nothing is cached; each call recomputes.
    pub async fn summary(&self, user: &User) -> Result<DashboardSummary> {
        let scope = FarmScope::resolve(user, EntityKind::Farm);

        let counts = DashboardCounts {
            users: self.users.count().await?,
            farms: self.farms.count(&scope).await?,
            site_visits: self.visits.count(&scope).await?,
            statements: self.statements.count(&scope).await?,
            employee_stats: self.stats.count(&scope).await?,
        };

        let recent_farms = self.farms.recent(&scope, RECENT_LIMIT).await?;
        let recent_visits = self.visits.recent(&scope, RECENT_LIMIT).await?;
        let recent_statements = self.statements.recent(&scope, RECENT_LIMIT).await?;
        let active_notices = self.notices.active_recent(ACTIVE_NOTICE_LIMIT).await?;

        tracing::debug!(
            user_id = user.id,
            role = user.role.as_str(),
            farms = counts.farms,
            "Dashboard summary computed"
        );

        Ok(DashboardSummary {
            counts,
            recent_farms,
            recent_visits,
            recent_statements,
            active_notices,
        })
    }
}
