//! # Validation Module
//!
//! Field-level validation rules for product payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (Rust)                                          │
//! │  ├── Type validation (serde deserialization)                           │
//! │  └── THIS MODULE: field rules, every violation collected               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (Postgres)                                          │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── PRIMARY KEY on product_id                                         │
//! │  └── CHECK (price > 0), CHECK (stock >= 0)                             │
//! │                                                                         │
//! │  Defense in depth: both layers enforce the same invariants             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each validator checks ONE field and returns at most one violation; the
//! [`crate::Product`] constructor runs them all and collects the failures.

use chrono::DateTime;

use crate::error::FieldViolation;
use crate::MAX_NAME_LENGTH;

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 255 characters
///
/// ## Example
/// ```rust
/// use tackle_core::validation::validate_name;
///
/// assert!(validate_name("Shimano FX2500 rod").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), FieldViolation> {
    if name.trim().is_empty() {
        return Err(FieldViolation::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(FieldViolation::TooLong {
            field: "name",
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be strictly greater than zero (no free items in the catalog)
///
/// ## Example
/// ```rust
/// use tackle_core::validation::validate_price;
///
/// assert!(validate_price(89.99).is_ok());
/// assert!(validate_price(0.01).is_ok());
/// assert!(validate_price(0.0).is_err());
/// assert!(validate_price(-5.0).is_err());
/// ```
pub fn validate_price(price: f64) -> Result<(), FieldViolation> {
    if !price.is_finite() {
        return Err(FieldViolation::InvalidFormat {
            field: "price",
            reason: "must be a finite number".to_string(),
        });
    }

    if price <= 0.0 {
        return Err(FieldViolation::MustBePositive { field: "price" });
    }

    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be zero or greater (an empty shelf is fine, a negative one is not)
pub fn validate_stock(stock: i32) -> Result<(), FieldViolation> {
    if stock < 0 {
        return Err(FieldViolation::MustBeNonNegative { field: "stock" });
    }

    Ok(())
}

/// Validates a caller-supplied product ID.
///
/// ## Rules
/// - Must be a valid UUID string (the generated form is UUID v4)
///
/// Only invoked when the payload carries an explicit `product_id`; absent
/// IDs are generated instead.
pub fn validate_product_id(id: &str) -> Result<(), FieldViolation> {
    if id.trim().is_empty() {
        return Err(FieldViolation::Required { field: "product_id" });
    }

    uuid::Uuid::parse_str(id).map_err(|_| FieldViolation::InvalidFormat {
        field: "product_id",
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates a caller-supplied timestamp string.
///
/// ## Rules
/// - Must parse as RFC 3339 / ISO-8601 (e.g., `2026-08-30T12:00:00Z`)
///
/// Only invoked when the payload carries the field; absent timestamps are
/// generated instead.
pub fn validate_timestamp(field: &'static str, value: &str) -> Result<(), FieldViolation> {
    DateTime::parse_from_rfc3339(value).map_err(|e| FieldViolation::InvalidFormat {
        field,
        reason: format!("must be an ISO-8601 timestamp ({e})"),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Shimano FX2500 rod").is_ok());
        assert!(validate_name("x").is_ok());
        assert!(validate_name(&"a".repeat(255)).is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(89.99).is_ok());
        assert!(validate_price(0.01).is_ok());

        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-5.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(10).is_ok());

        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_timestamp() {
        assert!(validate_timestamp("created_at", "2026-08-30T12:00:00Z").is_ok());
        assert!(validate_timestamp("created_at", "2026-08-30T12:00:00.123456+00:00").is_ok());

        assert!(validate_timestamp("created_at", "yesterday").is_err());
        assert!(validate_timestamp("created_at", "2026-08-30").is_err());
    }
}
