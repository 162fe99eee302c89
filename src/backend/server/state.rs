/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the three long-lived services:
 * - the credential store (user registration and login)
 * - the token service (issue and verify bearer tokens)
 * - the book store
 *
 * All three are immutable after construction and shared through `Arc`, so
 * cloning the state per request is cheap and needs no locking.
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::credentials::{CredentialError, CredentialStore};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::books::db::BookStore;
use crate::shared::config::AppConfig;

/// Shared handle to the book store
pub type SharedBookStore = Arc<dyn BookStore>;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Registration and password verification
    pub credentials: Arc<CredentialStore>,

    /// Bearer token issue and verification
    pub tokens: Arc<TokenService>,

    /// Book persistence
    pub books: SharedBookStore,
}

impl AppState {
    /// Build the services from configuration and the chosen stores
    pub async fn new(
        config: &AppConfig,
        users: Arc<dyn UserStore>,
        books: SharedBookStore,
    ) -> Result<Self, CredentialError> {
        let credentials = CredentialStore::new(users, config.bcrypt_cost).await?;
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl);

        Ok(Self {
            credentials: Arc::new(credentials),
            tokens: Arc::new(tokens),
            books,
        })
    }
}

impl FromRef<AppState> for Arc<CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for SharedBookStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.books.clone()
    }
}
