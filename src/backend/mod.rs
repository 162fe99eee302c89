//! Backend Module
//!
//! This module contains all server-side code for the book catalog: the Axum
//! application, authentication, the book catalogue and persistence.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, token service, user handlers
//! - **`books`** - Book model, store port and CRUD handlers
//! - **`store`** - Postgres and in-memory store implementations
//! - **`middleware`** - Bearer token gate
//! - **`error`** - `ApiError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── books/          - Book catalogue
//! ├── store/          - Persistence backends
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! request ─► TraceLayer ─► CorsLayer ─► router
//!                                        ├─ public route ─► handler
//!                                        └─ protected route ─► auth_middleware ─► handler
//! handler ─► core service (CredentialStore / TokenService / BookStore)
//!         ◄─ Result<_, CoreError> ─► ApiError ─► JSON response
//! ```
//!
//! # Thread Safety
//!
//! Services in `AppState` are immutable and shared through `Arc`. The only
//! mutable state lives in the stores: the Postgres pool, or the in-memory
//! store's `RwLock`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Book catalogue
pub mod books;

/// Persistence backends
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
