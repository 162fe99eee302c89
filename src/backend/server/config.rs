/**
 * Store Configuration
 *
 * This module picks the persistence backend from `AppConfig`.
 *
 * # Backends
 *
 * - `DATABASE_URL` set: connect to PostgreSQL and run migrations. Any
 *   failure here aborts startup; a half-migrated database is never served.
 * - `DATABASE_URL` unset: an in-memory store that lives as long as the
 *   process. Useful for local development and tests.
 */
use std::sync::Arc;

use crate::backend::auth::users::UserStore;
use crate::backend::books::db::BookStore;
use crate::backend::store::{MemoryStore, PgStore, StoreError};
use crate::shared::config::AppConfig;

/// The user and book stores, backed by the same storage
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub books: Arc<dyn BookStore>,
}

impl Stores {
    /// Both ports served by one in-memory store
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            books: Arc::new(store),
        }
    }

    /// Both ports served by one Postgres pool
    pub fn postgres(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            books: store,
        }
    }
}

/// Load the stores configured by `config`
///
/// # Errors
///
/// Returns `StoreError::Database` if the connection fails and
/// `StoreError::Migration` if migrations cannot be applied.
pub async fn load_stores(config: &AppConfig) -> Result<Stores, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory store; data is lost on restart.");
        return Ok(Stores::in_memory());
    };

    tracing::info!("Connecting to database...");
    let store = PgStore::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    store.migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(Stores::postgres(store))
}
