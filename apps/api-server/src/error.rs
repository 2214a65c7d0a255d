//! # API Error Types
//!
//! What an HTTP client sees when something goes wrong.
//!
//! ## Status Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError                → 400 + per-field details               │
//! │  DbError::ConstraintViolation   → 400 (schema-level rejection)          │
//! │  ApiError::NotFound             → 404                                   │
//! │  DbError::DuplicateKey          → 409                                   │
//! │  DbError::* (anything else)     → 500 + backend detail                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found never originates in tackle-db (absent rows come back as
//! `None`/`false`); handlers translate those into [`ApiError::NotFound`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use tackle_core::ValidationError;
use tackle_db::DbError;

/// Errors a route handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed product validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested product does not exist.
    #[error("product not found")]
    NotFound,

    /// The storage layer failed.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(err) => {
                let details: Vec<String> = err
                    .violations()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "Validation error", "details": details }),
                )
            }

            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Product not found" }),
            ),

            ApiError::Db(DbError::DuplicateKey(detail)) => (
                StatusCode::CONFLICT,
                json!({ "error": "Duplicate product", "details": detail }),
            ),

            ApiError::Db(DbError::ConstraintViolation(detail)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Constraint violation", "details": detail }),
            ),

            ApiError::Db(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Database error", "details": err.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tackle_core::FieldViolation;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::Validation(ValidationError::new(vec![FieldViolation::Required {
            field: "name",
        }]));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_duplicate_key_maps_to_409() {
        let err = ApiError::Db(DbError::DuplicateKey("products_pkey".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_storage_unavailable_maps_to_500() {
        let err = ApiError::Db(DbError::StorageUnavailable("refused".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
