pub mod api;
pub mod error;
pub mod state;

use std::sync::Arc;

use infrastructure::database::DatabaseConnection;
use infrastructure::{
    SeaOrmEmployeeStatsRepository, SeaOrmFarmRepository, SeaOrmNoticeRepository,
    SeaOrmSiteVisitRepository, SeaOrmStatementRepository, SeaOrmUserRepository,
};
use state::AppState;

/// Wire the SeaORM repositories into the application services.
pub fn setup_app_state(db: DatabaseConnection) -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(SeaOrmUserRepository::new(db.clone())),
        Arc::new(SeaOrmFarmRepository::new(db.clone())),
        Arc::new(SeaOrmSiteVisitRepository::new(db.clone())),
        Arc::new(SeaOrmNoticeRepository::new(db.clone())),
        Arc::new(SeaOrmStatementRepository::new(db.clone())),
        Arc::new(SeaOrmEmployeeStatsRepository::new(db)),
    ))
}
