//! Shared Error Types
//!
//! This module defines the field-level validation errors produced when
//! request data is checked against a declarative rule set.
//!
//! # Error Categories
//!
//! - `FieldError` - A single violated constraint on a named field
//! - `ValidationErrors` - Every violation found in one validation pass
//!
//! # Usage
//!
//! ```rust
//! use book_catalog::shared::error::ValidationErrors;
//!
//! let errors = ValidationErrors::single("email", "Please provide an email");
//! assert_eq!(errors.len(), 1);
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One violated constraint on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable guidance for the client
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field errors collected while validating one input
///
/// Never empty when returned from [`crate::shared::validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wrap a list of field errors
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Create an error set holding a single field error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new(field, message)])
    }

    /// The individual field errors, in rule order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of field errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when `field` has at least one error
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Consume into the underlying list
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validation failed: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}
