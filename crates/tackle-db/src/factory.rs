//! # Database Factory
//!
//! Selects and instantiates a storage backend by selector key.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Backend Selection                                   │
//! │                                                                         │
//! │  create_database(selector, config)                                     │
//! │       │                                                                 │
//! │       ├── selector = None → read DB_TYPE env (default "postgres")      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BackendKind::parse(key)   ← compile-time registry, case-insensitive   │
//! │       │                                                                 │
//! │       ├── unknown key → DbError::UnsupportedBackend                    │
//! │       │                 (message lists every registered key)           │
//! │       ▼                                                                 │
//! │  match kind { Postgres => PostgresDatabase::connect(...) }             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Box<dyn Database>  ← caller depends on the trait only                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Today only Postgres is registered. Adding an engine later means one new
//! [`BackendKind`] variant, one registry entry and one match arm; no calling
//! code changes.

use std::env;

use crate::backend::Database;
use crate::error::{DbError, DbResult};
use crate::postgres::{PgConfig, PostgresDatabase};

/// Selector key used when neither the caller nor the environment names one.
pub const DEFAULT_BACKEND: &str = "postgres";

/// Every selector key the factory recognizes.
///
/// Populated at compile time and read-only thereafter.
const REGISTERED_BACKENDS: &[&str] = &["postgres"];

/// Returns the registered selector keys.
pub fn available_backends() -> &'static [&'static str] {
    REGISTERED_BACKENDS
}

// =============================================================================
// Backend Kind
// =============================================================================

/// A registered storage backend, tagged by its selector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// PostgreSQL over a single persistent connection.
    Postgres,
}

impl BackendKind {
    /// Parses a selector key (case-insensitive).
    ///
    /// ## Errors
    /// [`DbError::UnsupportedBackend`] listing every registered key when the
    /// selector is unrecognized.
    pub fn parse(key: &str) -> DbResult<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(BackendKind::Postgres),
            _ => Err(DbError::UnsupportedBackend {
                requested: key.to_string(),
                available: REGISTERED_BACKENDS.join(", "),
            }),
        }
    }
}

impl Default for BackendKind {
    fn default() -> Self {
        BackendKind::Postgres
    }
}

// =============================================================================
// Creation Entry Point
// =============================================================================

/// Creates a ready-to-use backend for the given selector key.
///
/// When `selector` is `None`, the `DB_TYPE` environment variable decides,
/// falling back to [`DEFAULT_BACKEND`]. The returned backend has already run
/// its schema bootstrap.
///
/// ## Example
/// ```rust,ignore
/// let config = PgConfig::new("localhost", "shop", "secret", "fishing");
/// let db = create_database(Some("postgres"), &config).await?;
/// let catalog = db.get_all_products().await?;
/// ```
pub async fn create_database(
    selector: Option<&str>,
    config: &PgConfig,
) -> DbResult<Box<dyn Database>> {
    let key = match selector {
        Some(key) => key.to_string(),
        None => env::var("DB_TYPE").unwrap_or_else(|_| DEFAULT_BACKEND.to_string()),
    };

    match BackendKind::parse(&key)? {
        BackendKind::Postgres => Ok(Box::new(PostgresDatabase::connect(config).await?)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
