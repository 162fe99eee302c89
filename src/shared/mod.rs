//! Shared Module
//!
//! This module contains types that are independent of the HTTP server:
//! configuration, declarative validation and the JSON response envelope.
//! Nothing here touches the network or the store, so it can be unit-tested
//! in isolation.

/// Shared error types
pub mod error;

/// Declarative field validation
pub mod validation;

/// JSON response envelope
pub mod response;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{FieldError, ValidationErrors};
pub use response::ApiResponse;
pub use validation::{validate, FieldRule, FieldValue, Fields, Rule};
