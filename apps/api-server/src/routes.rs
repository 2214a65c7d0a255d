//! # HTTP Routes
//!
//! Thin glue between HTTP and the Database trait.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Request Flow                                      │
//! │                                                                         │
//! │  POST /products {"name": "...", "price": 89.99, "stock": 10}           │
//! │       │                                                                 │
//! │       ▼ serde (axum Json extractor)                                    │
//! │  NewProduct                                                            │
//! │       │                                                                 │
//! │       ▼ Product::try_from_new     ── fail → 400 + every violation      │
//! │  Product                                                               │
//! │       │                                                                 │
//! │       ▼ db.create_product         ── fail → 409 / 400 / 500            │
//! │  201 Created + stored product as JSON                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never touch SQL or validation rules themselves; they decode,
//! delegate and encode.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::debug;

use crate::error::ApiError;
use tackle_core::{NewProduct, Product};
use tackle_db::Database;

/// Shared handle to the factory-built storage backend.
pub type Db = Arc<dyn Database>;

/// Builds the application router.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/products", get(get_all_products).post(create_product))
        .route(
            "/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/health", get(health))
        .with_state(db)
}

/// `POST /products` - validate and persist a new catalog entry.
async fn create_product(
    State(db): State<Db>,
    Json(candidate): Json<NewProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let product = Product::try_from_new(candidate)?;
    debug!(product_id = %product.product_id, "create_product request");

    let created = db.create_product(&product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /products/{product_id}` - fetch one product.
async fn get_product(
    State(db): State<Db>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    match db.get_product(&product_id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound),
    }
}

/// `GET /products` - list the whole catalog, ordered by name.
async fn get_all_products(State(db): State<Db>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = db.get_all_products().await?;
    Ok(Json(products))
}

/// `PUT /products/{product_id}` - replace the mutable fields of one product.
async fn update_product(
    State(db): State<Db>,
    Path(product_id): Path<String>,
    Json(candidate): Json<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = Product::try_from_new(candidate)?;
    debug!(product_id = %product_id, "update_product request");

    match db.update_product(&product_id, product).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::NotFound),
    }
}

/// `DELETE /products/{product_id}` - hard-delete one product.
async fn delete_product(
    State(db): State<Db>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if db.delete_product(&product_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// `GET /health` - liveness probe.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
