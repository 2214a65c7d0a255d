//! # tackle-core: Pure Domain Logic for Tacklebox
//!
//! This crate is the **heart** of the Tacklebox inventory service. It holds
//! the product model and its validation rules as pure code with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tacklebox Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  HTTP API (apps/api-server)                     │   │
//! │  │    POST /products ─ GET /products ─ PUT ─ DELETE ─ /health     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tackle-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌────────────┐   ┌───────────┐               │   │
//! │  │   │  product  │   │ validation │   │   error   │               │   │
//! │  │   │  Product  │   │   rules    │   │ Violation │               │   │
//! │  │   │NewProduct │   │   checks   │   │   types   │               │   │
//! │  │   └───────────┘   └────────────┘   └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tackle-db (Database Layer)                     │   │
//! │  │          Database trait, factory, Postgres backend              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The [`Product`] entity, candidate payloads, default factories
//! - [`validation`] - Per-field validation rules
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: construction either yields a well-formed entity or
//!    a full list of violations - nothing partial
//! 2. **No I/O**: database and network access are FORBIDDEN here
//! 3. **Explicit Defaults**: `product_id` and timestamps come from named
//!    factory functions, never hidden field magic
//!
//! ## Example Usage
//!
//! ```rust
//! use tackle_core::{NewProduct, Product};
//!
//! let candidate = NewProduct {
//!     name: Some("Shimano FX2500 rod".to_string()),
//!     price: Some(89.99),
//!     stock: Some(10),
//!     description: Some("Light freshwater spinning rod".to_string()),
//!     ..Default::default()
//! };
//!
//! let product = Product::try_from_new(candidate).unwrap();
//! assert!(product.price > 0.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tackle_core::Product` instead of
// `use tackle_core::product::Product`

pub use error::{FieldViolation, ValidationError, ValidationResult};
pub use product::{current_timestamp, generate_product_id, NewProduct, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
///
/// Mirrors the `VARCHAR(255)` column width so the validator and the schema
/// reject the same inputs.
pub const MAX_NAME_LENGTH: usize = 255;
