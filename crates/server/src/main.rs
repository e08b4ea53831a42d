use anyhow::Result;
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the layered settings files
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// API port (overrides the settings file)
    #[arg(long)]
    api_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("info,server=debug"))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut settings = infrastructure::Settings::load(&args.config_dir)?;
    if let Some(port) = args.api_port {
        settings.api_port = port;
    }

    let db = infrastructure::database::connect(&settings.database_url).await?;

    if settings.migrate_on_start {
        info!("Running database migrations");
        Migrator::up(&db, None).await?;
    }

    let state = setup_app_state(db);
    let app = api::create_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], settings.api_port));
    info!("API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
