//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users/register - User registration
//! - **`login`** - POST /api/users/login - User authentication
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created → user returned (201)
//! 2. **Login**: email and password → credentials verified → bearer token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → token verified by
//!    `auth_middleware` → handler runs

/// Response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
