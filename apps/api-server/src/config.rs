//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The server is the ONLY place that reads the environment; the
//! core crates receive plain values.

use std::env;

use tackle_db::PgConfig;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port
    pub port: u16,

    /// Backend selector key (`DB_TYPE`); `None` lets the factory default
    pub db_type: Option<String>,

    /// Postgres connection parameters
    pub db: PgConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `PORT` (default 8080)
    /// - `DB_TYPE` (default handled by the factory: "postgres")
    /// - `DB_HOST` (default "localhost"), `DB_PORT` (default 5432)
    /// - `DB_USER` (default "postgres"), `DB_PASS` (default empty)
    /// - `DB_NAME` (default "tacklebox")
    pub fn load() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?;

        let db_port: u16 = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DB_PORT".to_string()))?;

        let db = PgConfig::new(
            env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            env::var("DB_PASS").unwrap_or_default(),
            env::var("DB_NAME").unwrap_or_else(|_| "tacklebox".to_string()),
        )
        .port(db_port);

        Ok(AppConfig {
            port,
            db_type: env::var("DB_TYPE").ok(),
            db,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
