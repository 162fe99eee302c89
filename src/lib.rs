//! Book Catalog - Main Library
//!
//! A JSON API for a book catalogue. Anyone can browse books; creating,
//! updating and deleting them requires a bearer token obtained by logging in.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, validation, response envelope, field errors
//! - **`backend`** - Axum server, authentication, books, persistence
//!
//! # Authentication
//!
//! 1. `POST /api/users/register` stores the user with a bcrypt-hashed password
//! 2. `POST /api/users/login` verifies the password and returns an HS256 JWT
//! 3. Mutating book routes require `Authorization: Bearer <token>`
//!
//! # Usage
//!
//! ```rust,no_run
//! use book_catalog::backend::server::create_app;
//! use book_catalog::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Each layer has its own `thiserror` enum (`ConfigError`, `ValidationErrors`,
//! `StoreError`, `CredentialError`, `TokenError`); handlers convert them into
//! `ApiError`, which renders the JSON error envelope.

/// Shared types and configuration
pub mod shared;

/// Backend server-side code
pub mod backend;
