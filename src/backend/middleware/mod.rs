//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token gate for the mutating book routes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use axum::{middleware, routing::post, Router};
//! use book_catalog::backend::auth::TokenService;
//! use book_catalog::backend::middleware::auth_middleware;
//!
//! let tokens = Arc::new(TokenService::new("secret", Duration::from_secs(3600)));
//! let protected: Router = Router::new()
//!     .route("/api/books", post(|| async { "created" }))
//!     .route_layer(middleware::from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
