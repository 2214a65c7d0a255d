//! # Product Model
//!
//! The catalog entry for a fishing-shop item, plus its construction rules.
//!
//! ## Construction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Construction                                 │
//! │                                                                         │
//! │  JSON payload (HTTP body, test fixture, ...)                           │
//! │       │                                                                 │
//! │       ▼ serde                                                           │
//! │  NewProduct { name?, price?, stock?, ... }                             │
//! │       │                                                                 │
//! │       ▼ Product::try_from_new                                          │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │ run EVERY field validator, collect fails  │──► Err(ValidationError)│
//! │  └───────────────────────────────────────────┘     (all violations)   │
//! │       │ all pass                                                        │
//! │       ▼                                                                 │
//! │  fill defaults: product_id ← generate_product_id()                     │
//! │                 created_at/updated_at ← current_timestamp()            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product (well-formed, ready to persist)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual Timestamp Rule
//! `created_at` is set once and never touched again; `updated_at` is bumped
//! by [`Product::refresh_timestamp`] on every successful update. The storage
//! layer never rewrites `product_id` or `created_at` either, so the rule
//! holds even against a mangled update payload.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FieldViolation, ValidationError, ValidationResult};
use crate::validation;

// =============================================================================
// Default-Value Factories
// =============================================================================
// Explicit functions rather than hidden field-level magic, so defaulting is
// auditable and testable on its own.

/// Generates a fresh product ID (UUID v4 string form).
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the current UTC time as an ISO-8601 / RFC 3339 string.
///
/// Precision is truncated to microseconds to match what Postgres stores in a
/// `TIMESTAMPTZ` column, so a value survives a write/read round-trip
/// byte-for-byte.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

// =============================================================================
// New Product (candidate payload)
// =============================================================================

/// An unvalidated candidate product, as decoded from a flat JSON mapping.
///
/// Every field is optional at this stage so that a payload missing several
/// required fields produces one [`ValidationError`] listing all of them,
/// instead of failing on the first during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A validated catalog entry.
///
/// ## Invariants (enforced at construction AND by the storage schema)
/// - `name` non-empty, at most 255 characters
/// - `price > 0`
/// - `stock >= 0`
/// - `product_id` immutable once created
/// - `updated_at >= created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4 string), immutable after creation.
    pub product_id: String,

    /// Display name, 1–255 characters.
    pub name: String,

    /// Unit price, strictly greater than zero.
    pub price: f64,

    /// Units on the shelf, zero or greater.
    pub stock: i32,

    /// Optional free-text description.
    pub description: Option<String>,

    /// ISO-8601 creation time, set once.
    pub created_at: String,

    /// ISO-8601 last-modification time, refreshed on every update.
    pub updated_at: String,
}

impl Product {
    /// Validates a candidate payload into a well-formed product.
    ///
    /// Runs every field rule and returns either a complete entity or a
    /// [`ValidationError`] carrying the full list of violations. Absent
    /// `product_id` / `created_at` / `updated_at` are filled from the
    /// default-value factories; present ones are kept as supplied.
    ///
    /// ## Example
    /// ```rust
    /// use tackle_core::{NewProduct, Product};
    ///
    /// let candidate = NewProduct {
    ///     name: Some("Okuma Ceymar spinning reel".to_string()),
    ///     price: Some(54.99),
    ///     stock: Some(12),
    ///     ..Default::default()
    /// };
    ///
    /// let product = Product::try_from_new(candidate).unwrap();
    /// assert_eq!(product.created_at, product.updated_at);
    /// ```
    pub fn try_from_new(candidate: NewProduct) -> ValidationResult<Product> {
        let mut violations: Vec<FieldViolation> = Vec::new();

        match candidate.name.as_deref() {
            Some(name) => {
                if let Err(v) = validation::validate_name(name) {
                    violations.push(v);
                }
            }
            None => violations.push(FieldViolation::Required { field: "name" }),
        }

        match candidate.price {
            Some(price) => {
                if let Err(v) = validation::validate_price(price) {
                    violations.push(v);
                }
            }
            None => violations.push(FieldViolation::Required { field: "price" }),
        }

        match candidate.stock {
            Some(stock) => {
                if let Err(v) = validation::validate_stock(stock) {
                    violations.push(v);
                }
            }
            None => violations.push(FieldViolation::Required { field: "stock" }),
        }

        if let Some(ref id) = candidate.product_id {
            if let Err(v) = validation::validate_product_id(id) {
                violations.push(v);
            }
        }

        if let Some(ref ts) = candidate.created_at {
            if let Err(v) = validation::validate_timestamp("created_at", ts) {
                violations.push(v);
            }
        }

        if let Some(ref ts) = candidate.updated_at {
            if let Err(v) = validation::validate_timestamp("updated_at", ts) {
                violations.push(v);
            }
        }

        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }

        // One clock read, so defaulted created_at == defaulted updated_at.
        let now = current_timestamp();

        Ok(Product {
            product_id: candidate.product_id.unwrap_or_else(generate_product_id),
            // Validated Some above; the or-default arms are unreachable but
            // keep this free of unwraps.
            name: candidate.name.unwrap_or_default(),
            price: candidate.price.unwrap_or_default(),
            stock: candidate.stock.unwrap_or_default(),
            description: candidate.description,
            created_at: candidate.created_at.unwrap_or_else(|| now.clone()),
            updated_at: candidate.updated_at.unwrap_or(now),
        })
    }

    /// Overwrites `updated_at` with the current UTC time.
    ///
    /// Leaves `product_id` and `created_at` untouched. Invoked by storage
    /// backends right before persisting an update.
    pub fn refresh_timestamp(&mut self) {
        self.updated_at = current_timestamp();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, price: f64, stock: i32) -> NewProduct {
        NewProduct {
            name: Some(name.to_string()),
            price: Some(price),
            stock: Some(stock),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_candidate_builds_product() {
        let product = Product::try_from_new(candidate("Braided line 20lb", 14.50, 30)).unwrap();

        assert_eq!(product.name, "Braided line 20lb");
        assert_eq!(product.price, 14.50);
        assert_eq!(product.stock, 30);
        assert_eq!(product.description, None);
        // Generated id must be a parseable UUID
        assert!(Uuid::parse_str(&product.product_id).is_ok());
        // Fresh entity: both timestamps come from the same clock read
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_price_boundaries() {
        assert!(Product::try_from_new(candidate("Hook pack", 0.01, 1)).is_ok());
        assert!(Product::try_from_new(candidate("Hook pack", 0.0, 1)).is_err());
        assert!(Product::try_from_new(candidate("Hook pack", -5.0, 1)).is_err());
    }

    #[test]
    fn test_stock_boundaries() {
        assert!(Product::try_from_new(candidate("Sinker set", 3.99, 0)).is_ok());
        assert!(Product::try_from_new(candidate("Sinker set", 3.99, -1)).is_err());
    }

    #[test]
    fn test_every_violation_reported() {
        let bad = NewProduct {
            name: Some(String::new()),
            price: Some(-1.0),
            stock: Some(-1),
            ..Default::default()
        };

        let err = Product::try_from_new(bad).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["name", "price", "stock"]);
    }

    #[test]
    fn test_missing_fields_reported_as_required() {
        let err = Product::try_from_new(NewProduct::default()).unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err
            .violations()
            .iter()
            .all(|v| matches!(v, FieldViolation::Required { .. })));
    }

    #[test]
    fn test_supplied_fields_are_kept() {
        let id = generate_product_id();
        let new = NewProduct {
            product_id: Some(id.clone()),
            created_at: Some("2026-01-01T00:00:00Z".to_string()),
            updated_at: Some("2026-01-02T00:00:00Z".to_string()),
            description: Some("telescopic travel rod".to_string()),
            ..candidate("Travel rod 2.4m", 39.90, 5)
        };

        let product = Product::try_from_new(new).unwrap();
        assert_eq!(product.product_id, id);
        assert_eq!(product.created_at, "2026-01-01T00:00:00Z");
        assert_eq!(product.updated_at, "2026-01-02T00:00:00Z");
        assert_eq!(product.description.as_deref(), Some("telescopic travel rod"));
    }

    #[test]
    fn test_bad_supplied_id_and_timestamp_rejected() {
        let new = NewProduct {
            product_id: Some("not-a-uuid".to_string()),
            created_at: Some("last tuesday".to_string()),
            ..candidate("Landing net", 24.99, 4)
        };

        let err = Product::try_from_new(new).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["product_id", "created_at"]);
    }

    #[test]
    fn test_refresh_timestamp_only_touches_updated_at() {
        let mut product =
            Product::try_from_new(candidate("Swivel assortment", 6.75, 50)).unwrap();
        let id = product.product_id.clone();
        let created = product.created_at.clone();
        let before = product.updated_at.clone();

        product.refresh_timestamp();

        assert_eq!(product.product_id, id);
        assert_eq!(product.created_at, created);
        // RFC 3339 with fixed precision sorts lexicographically by time
        assert!(product.updated_at >= before);
        assert!(product.updated_at >= product.created_at);
    }

    #[test]
    fn test_serde_round_trip() {
        let product = Product::try_from_new(NewProduct {
            description: Some("floating crankbait, 9cm".to_string()),
            ..candidate("Rapala Original F09", 12.99, 18)
        })
        .unwrap();

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }

    #[test]
    fn test_current_timestamp_parses_and_round_trips() {
        let ts = current_timestamp();
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(
            parsed
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            ts
        );
    }
}
