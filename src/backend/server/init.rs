/**
 * Server Initialization
 *
 * This module builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Load the stores (Postgres or in-memory)
 * 2. Build the credential store and token service
 * 3. Create the router with all routes and layers
 */
use axum::Router;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_stores;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::config::AppConfig;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to initialise storage: {0}")]
    Store(#[from] StoreError),

    #[error("failed to initialise credentials: {0}")]
    Credentials(#[from] CredentialError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is configured but unreachable or cannot be
/// migrated, or when the bcrypt cost is rejected.
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing book catalog server");

    let stores = load_stores(config).await?;
    let app_state = AppState::new(config, stores.users, stores.books).await?;

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
