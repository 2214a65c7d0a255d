//! # Database Error Types
//!
//! Error types for storage operations and backend selection.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Postgres Error (sqlx::Error)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorized, backend detail kept verbatim     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in api-server) ← Mapped to an HTTP status + JSON body       │
//! │                                                                         │
//! │  Not-found is NOT here: absent rows surface as Option::None / false.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No variant is ever swallowed or retried inside this crate; every failure
//! propagates to the caller immediately.

use thiserror::Error;

/// Storage and factory errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The backend selector key is not registered with the factory.
    ///
    /// ## When This Occurs
    /// - `DB_TYPE` set to a typo ("postgress") or an engine we don't ship
    #[error("unsupported backend '{requested}' (available: {available})")]
    UnsupportedBackend {
        requested: String,
        available: String,
    },

    /// The relational engine cannot be reached.
    ///
    /// ## When This Occurs
    /// - Engine is down or the host/port is wrong
    /// - Credentials rejected at connect time
    /// - Connection dropped mid-statement
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A row with the same primary key already exists.
    ///
    /// ## When This Occurs
    /// - Creating a product with a `product_id` that is already stored
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The storage layer rejected a write via a CHECK / NOT NULL constraint.
    ///
    /// ## When This Occurs
    /// - A write slipping past validation with `price <= 0` or `stock < 0`
    ///   (defense in depth: the schema enforces the same invariants)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other statement failure, with the backend's detail attached.
    #[error("query failed: {0}")]
    QueryFailed(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// ErrorKind::UniqueViolation                → DbError::DuplicateKey
/// ErrorKind::CheckViolation / NotNull / FK  → DbError::ConstraintViolation
/// Io / Tls / Pool* / Configuration         → DbError::StorageUnavailable
/// Other                                     → DbError::QueryFailed
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                use sqlx::error::ErrorKind;

                let detail = db_err.message().to_string();
                match db_err.kind() {
                    ErrorKind::UniqueViolation => DbError::DuplicateKey(detail),
                    ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::ForeignKeyViolation => DbError::ConstraintViolation(detail),
                    _ => DbError::QueryFailed(detail),
                }
            }

            sqlx::Error::Io(e) => DbError::StorageUnavailable(e.to_string()),
            sqlx::Error::Tls(e) => DbError::StorageUnavailable(e.to_string()),
            sqlx::Error::Configuration(e) => DbError::StorageUnavailable(e.to_string()),
            sqlx::Error::PoolTimedOut => {
                DbError::StorageUnavailable("connection acquire timed out".to_string())
            }
            sqlx::Error::PoolClosed => {
                DbError::StorageUnavailable("connection is closed".to_string())
            }

            other => DbError::QueryFailed(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================
