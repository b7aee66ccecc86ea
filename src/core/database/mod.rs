//! Connection factory for the product store.
//!
//! A [`Database`] is built once at startup and cloned by handle into every
//! handler. Each handler checks out its own [`Session`] for the duration of
//! one call; dropping the session returns it to the pool on every exit path.

mod error;
mod location;

pub use error::{DatabaseError, DatabaseResult};
pub use location::{Backend, DEFAULT_DATABASE_URL, StorageLocation};

use std::sync::Arc;

use sqlx::any::{AnyPoolOptions, install_default_drivers};
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};
use tracing::{info, instrument};

use super::config::DatabaseConfig;

/// A session checked out of the pool.
pub type Session = PoolConnection<Any>;

const SQLITE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price REAL NOT NULL,
    quantity INTEGER NOT NULL
)";

const POSTGRES_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL,
    quantity BIGINT NOT NULL
)";

/// Process-wide handle to the product store.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
    location: Arc<StorageLocation>,
}

impl Database {
    /// Open the store described by the configuration and ensure the table exists.
    pub async fn connect(config: &DatabaseConfig) -> DatabaseResult<Self> {
        let location = StorageLocation::parse(&config.url)?;
        Self::open(location, config.max_connections).await
    }

    /// Open a private in-memory SQLite store.
    pub async fn in_memory() -> DatabaseResult<Self> {
        Self::open(StorageLocation::in_memory(), 1).await
    }

    /// Open the pool for an already parsed location.
    #[instrument(skip_all, fields(backend = %location.backend()))]
    pub async fn open(location: StorageLocation, max_connections: u32) -> DatabaseResult<Self> {
        install_default_drivers();

        let mut options = AnyPoolOptions::new().max_connections(max_connections.max(1));
        if location.is_in_memory() {
            // Each SQLite memory connection is its own database.
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options
            .connect(location.url())
            .await
            .map_err(|e| DatabaseError::connect(location.redacted(), e))?;

        let database = Self {
            pool,
            location: Arc::new(location),
        };
        database.ensure_schema().await?;

        info!("Product store ready at {}", database.location.redacted());
        Ok(database)
    }

    /// Check a session out of the pool.
    pub async fn session(&self) -> DatabaseResult<Session> {
        self.pool.acquire().await.map_err(DatabaseError::Session)
    }

    /// The backend behind this handle.
    pub fn backend(&self) -> Backend {
        self.location.backend()
    }

    /// The normalized location this handle was opened with.
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Close the pool, waiting for checked-out sessions to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the product table if it is missing. Existing tables are left alone.
    async fn ensure_schema(&self) -> DatabaseResult<()> {
        let ddl = match self.backend() {
            Backend::Sqlite => SQLITE_SCHEMA,
            Backend::Postgres => POSTGRES_SCHEMA,
        };
        let mut session = self.session().await?;
        sqlx::query(ddl)
            .execute(&mut *session)
            .await
            .map_err(DatabaseError::Schema)?;
        Ok(())
    }
}
