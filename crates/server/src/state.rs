use std::sync::Arc;

use application::{
    DashboardService, EmployeeStatsService, FarmService, NoticeService, SiteVisitService,
    StatementService, UserService,
};
use domain::farm::FarmRepository;
use domain::notice::NoticeRepository;
use domain::statement::StatementRepository;
use domain::stats::EmployeeStatsRepository;
use domain::user::UserRepository;
use domain::visit::SiteVisitRepository;

/// Shared handler state: one service per screen plus the user
/// repository for resolving the request principal.
pub struct AppState {
    pub users_repo: Arc<dyn UserRepository>,
    pub dashboard: DashboardService,
    pub farms: FarmService,
    pub visits: SiteVisitService,
    pub notices: NoticeService,
    pub statements: StatementService,
    pub stats: EmployeeStatsService,
    pub users: UserService,
}

impl AppState {
    pub fn new(
        users_repo: Arc<dyn UserRepository>,
        farms_repo: Arc<dyn FarmRepository>,
        visits_repo: Arc<dyn SiteVisitRepository>,
        notices_repo: Arc<dyn NoticeRepository>,
        statements_repo: Arc<dyn StatementRepository>,
        stats_repo: Arc<dyn EmployeeStatsRepository>,
    ) -> Self {
        Self {
            dashboard: DashboardService::new(
                farms_repo.clone(),
                users_repo.clone(),
                visits_repo.clone(),
                statements_repo.clone(),
                stats_repo.clone(),
                notices_repo.clone(),
            ),
            farms: FarmService::new(farms_repo.clone()),
            visits: SiteVisitService::new(visits_repo, users_repo.clone()),
            notices: NoticeService::new(notices_repo),
            statements: StatementService::new(statements_repo),
            stats: EmployeeStatsService::new(stats_repo, farms_repo),
            users: UserService::new(users_repo.clone()),
            users_repo,
        }
    }
}
