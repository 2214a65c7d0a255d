//! # Postgres Backend
//!
//! Concrete [`Database`] implementation backed by PostgreSQL.
//!
//! ## Resource Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Postgres Backend Lifecycle                           │
//! │                                                                         │
//! │  PgConfig { host, port, user, password, database }                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgresDatabase::connect(config).await                               │
//! │       │  ├── open ONE persistent connection (auto-commit)              │
//! │       │  └── initialize(): CREATE TABLE IF NOT EXISTS products          │
//! │       ▼                                                                 │
//! │  CRUD calls: short blocking round-trips, one statement each            │
//! │                                                                         │
//! │  No pool, no transactions, no retries. The single connection is        │
//! │  guarded by a Mutex, so concurrent callers serialize; callers wanting  │
//! │  parallelism construct one backend instance per caller.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Row Mapping
//! Timestamps live as `TIMESTAMPTZ` in the engine and as ISO-8601 strings on
//! the domain model; conversion happens here at the read/write boundary,
//! truncated to microseconds (Postgres precision) so values round-trip
//! byte-for-byte.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, FromRow};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::backend::Database;
use crate::error::{DbError, DbResult};
use tackle_core::{current_timestamp, Product};

// =============================================================================
// Configuration
// =============================================================================

/// Connection parameters for the Postgres backend.
///
/// Supplied externally (the API server loads these from `DB_HOST`, `DB_USER`,
/// `DB_PASS`, `DB_NAME`); this crate never reads the environment for them.
#[derive(Debug, Clone)]
pub struct PgConfig {
    /// Database server host.
    pub host: String,

    /// Database server port. Default: 5432
    pub port: u16,

    /// Role to authenticate as.
    pub user: String,

    /// Password for the role.
    pub password: String,

    /// Database name to connect to.
    pub database: String,
}

impl PgConfig {
    /// Creates a configuration with the default Postgres port.
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        PgConfig {
            host: host.into(),
            port: 5432,
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    /// Sets a non-default port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw `products` row as it comes off the wire.
#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: String,
    name: String,
    price: f64,
    stock: i32,
    description: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            name: row.name,
            price: row.price,
            stock: row.stock,
            description: row.description,
            // Rows written by this service always carry timestamps; NULLs can
            // only come from rows created out-of-band, and get a fresh value
            // like the column defaults would.
            created_at: row.created_at.map(format_timestamp).unwrap_or_else(current_timestamp),
            updated_at: row.updated_at.map(format_timestamp).unwrap_or_else(current_timestamp),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(field: &str, value: &str) -> DbResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| DbError::QueryFailed(format!("invalid {field} timestamp '{value}': {e}")))
}

// =============================================================================
// Postgres Database
// =============================================================================

/// One `products` table behind one persistent auto-commit connection.
pub struct PostgresDatabase {
    // Exclusively owned by this instance; the Mutex serializes statement
    // execution, it does not make a shared connection concurrent.
    conn: Mutex<PgConnection>,
}

impl PostgresDatabase {
    /// Connects to Postgres and bootstraps the schema.
    ///
    /// ## What This Does
    /// 1. Opens a single connection from the supplied parameters
    /// 2. Runs [`Database::initialize`] before returning, so a constructed
    ///    backend is always ready to serve CRUD calls
    ///
    /// ## Errors
    /// [`DbError::StorageUnavailable`] when the engine cannot be reached or
    /// the schema cannot be created.
    pub async fn connect(config: &PgConfig) -> DbResult<Self> {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Connecting to Postgres"
        );

        let conn = config
            .connect_options()
            .connect()
            .await
            .map_err(|e| DbError::StorageUnavailable(e.to_string()))?;

        let db = PostgresDatabase {
            conn: Mutex::new(conn),
        };

        db.initialize().await?;

        Ok(db)
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn initialize(&self) -> DbResult<()> {
        info!("Ensuring products schema exists");

        let mut conn = self.conn.lock().await;

        // Idempotent bootstrap; the CHECK constraints mirror the domain
        // invariants enforced in tackle-core (defense in depth).
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                product_id   VARCHAR(36) PRIMARY KEY,
                name         VARCHAR(255) NOT NULL,
                price        DOUBLE PRECISION NOT NULL CHECK (price > 0),
                stock        INTEGER NOT NULL CHECK (stock >= 0),
                description  TEXT,
                created_at   TIMESTAMPTZ DEFAULT NOW(),
                updated_at   TIMESTAMPTZ DEFAULT NOW()
            )
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::StorageUnavailable(e.to_string()))?;

        Ok(())
    }

    async fn create_product(&self, product: &Product) -> DbResult<Product> {
        debug!(product_id = %product.product_id, name = %product.name, "Inserting product");

        let created_at = parse_timestamp("created_at", &product.created_at)?;
        let updated_at = parse_timestamp("updated_at", &product.updated_at)?;

        let mut conn = self.conn.lock().await;

        sqlx::query(
            r#"
            INSERT INTO products (product_id, name, price, stock, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&product.product_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .bind(created_at)
        .bind(updated_at)
        .execute(&mut *conn)
        .await?;

        // No server-side mutation happens on insert, so the input is echoed.
        Ok(product.clone())
    }

    async fn get_product(&self, product_id: &str) -> DbResult<Option<Product>> {
        let mut conn = self.conn.lock().await;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, price, stock, description, created_at, updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn get_all_products(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.conn.lock().await;

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, price, stock, description, created_at, updated_at
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        debug!(count = rows.len(), "Fetched product catalog");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update_product(
        &self,
        product_id: &str,
        mut product: Product,
    ) -> DbResult<Option<Product>> {
        debug!(product_id = %product_id, "Updating product");

        product.refresh_timestamp();
        let updated_at = parse_timestamp("updated_at", &product.updated_at)?;

        let mut conn = self.conn.lock().await;

        // Single statement: the target row is matched, rewritten and read
        // back at once. product_id and created_at are deliberately absent
        // from the SET list, so stored identity and creation time survive
        // whatever the input carries.
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $2, price = $3, stock = $4, description = $5, updated_at = $6
            WHERE product_id = $1
            RETURNING product_id, name, price, stock, description, created_at, updated_at
            "#,
        )
        .bind(product_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .bind(updated_at)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn delete_product(&self, product_id: &str) -> DbResult<bool> {
        debug!(product_id = %product_id, "Deleting product");

        let mut conn = self.conn.lock().await;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *conn)
            .await?;

        // Deleting a missing id is not an error, it just reports false.
        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
