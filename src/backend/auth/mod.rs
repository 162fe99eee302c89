//! Authentication Module
//!
//! This module handles user registration, password verification and bearer
//! tokens.
//!
//! # Architecture
//!
//! - **`users`** - User model, rule sets and the `UserStore` port
//! - **`password`** - bcrypt hashing behind the `PasswordHash` newtype
//! - **`credentials`** - `CredentialStore`: register and verify credentials
//! - **`sessions`** - `TokenService`: issue and verify JWTs
//! - **`handlers`** - HTTP handlers for the user endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── credentials.rs  - Registration and login checks
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (per-hash random salt) before storage
//! - Tokens are stateless HS256 JWTs carrying the user id
//! - Unknown email and wrong password are indistinguishable to the caller

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Registration and credential verification
pub mod credentials;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use credentials::{CredentialError, CredentialStore};
pub use handlers::types::LoginResponse;
pub use handlers::{login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{LoginRequest, RegisterRequest, User, UserStore};
