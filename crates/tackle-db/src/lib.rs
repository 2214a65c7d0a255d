//! # tackle-db: Database Layer for Tacklebox
//!
//! This crate provides persistence for the product catalog behind a single
//! backend-agnostic trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tacklebox Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (create_product route)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tackle-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │    Factory    │    │   Postgres   │  │   │
//! │  │   │  (backend.rs) │    │ (factory.rs)  │    │ (postgres.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ 5 CRUD ops +  │◄───│ key → backend │───►│ 1 connection │  │   │
//! │  │   │ initialize    │    │  "postgres"   │    │ auto-commit  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              PostgreSQL: one `products` table                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The [`Database`] trait every backend implements
//! - [`factory`] - Selector-key driven backend construction
//! - [`postgres`] - The Postgres implementation
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tackle_db::{create_database, PgConfig};
//!
//! let config = PgConfig::new("localhost", "shop", "secret", "fishing");
//!
//! // Schema bootstrap runs during construction
//! let db = create_database(Some("postgres"), &config).await?;
//!
//! let product = db.get_product("550e8400-e29b-41d4-a716-446655440000").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod factory;
pub mod postgres;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::Database;
pub use error::{DbError, DbResult};
pub use factory::{available_backends, create_database, BackendKind, DEFAULT_BACKEND};
pub use postgres::{PgConfig, PostgresDatabase};
