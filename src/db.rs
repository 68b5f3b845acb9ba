use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::StartupError;

/// Initialization phase of startup. Acquires the database connection pool
/// when one is configured; the caller must not bind the listener until this
/// resolves.
pub async fn init(config: &Config) -> Result<Option<PgPool>, StartupError> {
    let Some(url) = &config.database_url else {
        return Ok(None);
    };

    info!("Connecting to database...");
    let pool = PgPoolOptions::new().connect(url).await?;
    info!("Database connection established");

    Ok(Some(pool))
}
