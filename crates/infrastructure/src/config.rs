use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Run pending migrations on startup
    #[serde(default = "default_migrate")]
    pub migrate_on_start: bool,
}

fn default_database_url() -> String {
    "sqlite://farmdesk.db?mode=rwc".to_string()
}

fn default_api_port() -> u16 {
    3000
}

fn default_migrate() -> bool {
    true
}

impl Settings {
    /// Layered load: defaults, then `<dir>/default`, then the RUN_MODE
    /// file, then FARMDESK__-prefixed environment variables.
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. FARMDESK__DATABASE_URL=postgres://...)
            .add_source(Environment::with_prefix("FARMDESK").separator("__"))
            .build()?;

        // DATABASE_URL from the process environment (dotenv) wins
        let mut settings: Settings = s.try_deserialize()?;
        if let Ok(url) = std::env::var("DATABASE_URL") {
            settings.database_url = url;
        }
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            api_port: default_api_port(),
            migrate_on_start: default_migrate(),
        }
    }
}
