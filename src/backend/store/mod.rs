//! Store Module
//!
//! Persistence for users and books. The rest of the backend talks to the
//! `UserStore` and `BookStore` ports; two adapters implement both:
//!
//! - **`PgStore`** - PostgreSQL via sqlx, used when `DATABASE_URL` is set.
//!   Email uniqueness is enforced by a `UNIQUE` constraint.
//! - **`MemoryStore`** - process-local maps behind a tokio `RwLock`, used
//!   when no database is configured and throughout the tests.
//!
//! The SQL for each entity lives next to its model (`auth::users`,
//! `books::db`); this module only owns the connection and error mapping.

pub mod memory;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

pub use memory::MemoryStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("duplicate value for unique field '{field}'")]
    Duplicate { field: &'static str },

    /// Stored data could not be mapped back into a model
    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL-backed store
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }

    /// The underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Turn a unique-constraint failure into `StoreError::Duplicate`
pub(crate) fn map_unique_violation(err: sqlx::Error, field: &'static str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Duplicate { field };
        }
    }
    StoreError::Database(err)
}
