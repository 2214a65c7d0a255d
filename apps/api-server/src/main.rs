//! # Tacklebox API Server
//!
//! JSON-over-HTTP CRUD for the fishing-shop product catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Server                                       │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Routes ───► Database trait ───► Postgres │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                           tackle-core                                   │
//! │                      (Product validation)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::routes::Db;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Tacklebox API server...");

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        port = config.port,
        db_host = %config.db.host,
        db_name = %config.db.database,
        "Configuration loaded"
    );

    // Factory-create the storage backend; the schema bootstrap runs inside
    let db: Db = Arc::from(tackle_db::create_database(config.db_type.as_deref(), &config.db).await?);
    info!("Storage backend ready");

    // Build routes with permissive CORS for the shop frontend
    let app = routes::router(db)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
