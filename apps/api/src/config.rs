use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Size of the Postgres connection pool.
    pub db_max_connections: u32,
    /// Feed page size when the request does not pass `limit`.
    pub feed_default_limit: usize,
    /// Upper bound applied to any requested `limit`.
    pub feed_max_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let db_max_connections = parse_env_or("DB_MAX_CONNECTIONS", 10)?;
        anyhow::ensure!(db_max_connections > 0, "DB_MAX_CONNECTIONS must be at least 1");
        let feed_default_limit = parse_env_or("FEED_DEFAULT_LIMIT", 50)?;
        let feed_max_limit = parse_env_or("FEED_MAX_LIMIT", 200)?;
        anyhow::ensure!(
            feed_default_limit > 0 && feed_default_limit <= feed_max_limit,
            "FEED_DEFAULT_LIMIT must be between 1 and FEED_MAX_LIMIT ({feed_max_limit})"
        );

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db_max_connections,
            feed_default_limit,
            feed_max_limit,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
