//! # Database Trait
//!
//! The capability set every storage backend must implement.
//!
//! ## Contract at a Glance
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Database Trait                                    │
//! │                                                                         │
//! │  initialize()            idempotent schema bootstrap                   │
//! │  create_product(p)       persist, echo back        ─ DuplicateKey?     │
//! │  get_product(id)         Option<Product>           ─ never errs absent │
//! │  get_all_products()      Vec<Product> by name asc  ─ empty vec ok      │
//! │  update_product(id, p)   Option<Product> post-write─ id/created kept   │
//! │  delete_product(id)      bool (row removed?)       ─ idempotent        │
//! │                                                                         │
//! │  Callers depend on THIS trait only; the factory hides which backend   │
//! │  sits behind it.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Not-found is a normal outcome (`None` / `false`), never a `DbError`.

use async_trait::async_trait;

use crate::error::DbResult;
use tackle_core::Product;

/// A storage backend for the product catalog.
///
/// Implementations own their connection exclusively; a caller wanting
/// concurrent statement execution brings one instance per caller (or its own
/// serialization) rather than sharing a connection.
#[async_trait]
pub trait Database: Send + Sync {
    /// Idempotently ensures the durable schema exists.
    ///
    /// Safe to call every time a backend instance is constructed. Fails with
    /// [`crate::DbError::StorageUnavailable`] when the engine cannot be
    /// reached or the schema cannot be created.
    async fn initialize(&self) -> DbResult<()>;

    /// Persists a new product and returns it unchanged.
    ///
    /// ## Errors
    /// - [`crate::DbError::DuplicateKey`] - `product_id` already stored
    /// - [`crate::DbError::ConstraintViolation`] - schema CHECK rejected it
    /// - [`crate::DbError::StorageUnavailable`] - transport failure
    async fn create_product(&self, product: &Product) -> DbResult<Product>;

    /// Fetches one product by id; `None` when absent.
    async fn get_product(&self, product_id: &str) -> DbResult<Option<Product>>;

    /// Returns the whole catalog ordered by `name` ascending.
    ///
    /// An empty catalog yields an empty vec, never an error.
    async fn get_all_products(&self) -> DbResult<Vec<Product>>;

    /// Replaces `name`, `price`, `stock` and `description` of the row
    /// matching `product_id`.
    ///
    /// The incoming product's timestamp is refreshed before persisting. The
    /// stored row's `product_id` and `created_at` are never altered, even if
    /// the input carries different values for them. Returns the post-update
    /// stored product, or `None` when no row matched.
    async fn update_product(&self, product_id: &str, product: Product)
        -> DbResult<Option<Product>>;

    /// Removes the row if present.
    ///
    /// Idempotent: returns `true` when a row was actually removed, `false`
    /// when the id was already absent.
    async fn delete_product(&self, product_id: &str) -> DbResult<bool>;
}
