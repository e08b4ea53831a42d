pub mod entities;
pub mod repositories;

use sea_orm::Database;
pub use sea_orm::{DatabaseConnection, DbErr};

/// Open a connection to the entity store.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    tracing::info!("Connecting to database");
    Database::connect(database_url).await
}
