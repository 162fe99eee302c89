//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and the mapping from core errors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! The core services (credential store, token service, stores) never build
//! responses themselves; they return their own error enums, and handlers
//! convert them into `ApiError` with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
