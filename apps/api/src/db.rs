use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Opens the Postgres pool the data store reads through.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!(
        "Connecting to PostgreSQL (max {} connections)...",
        config.db_max_connections
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    info!("PostgreSQL pool ready");
    Ok(pool)
}
