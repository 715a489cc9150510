use anyhow::Result;
use config::{Config, Environment};
use sea_orm::Database;
use serde::Deserialize;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Country shown when a request does not name one.
pub const DEFAULT_COUNTRY: &str = "Germany";

/// Runtime settings, read from `.env` and the process environment
/// (`DATABASE_URL`, `BIND_ADDRESS`, `DEFAULT_COUNTRY`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub bind_address: String,
    pub default_country: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings: Settings = Config::builder()
            .set_default("database_url", "sqlite://temperatures.db")?
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("default_country", DEFAULT_COUNTRY)?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

/// Initialize application state from loaded settings
pub async fn initialize_app_state(settings: &Settings) -> Result<AppState> {
    info!("Connecting to database: {}", settings.database_url);
    let db = Database::connect(&settings.database_url).await?;

    Ok(AppState {
        db,
        default_country: settings.default_country.clone(),
    })
}
