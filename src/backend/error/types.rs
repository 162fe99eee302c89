/**
 * Backend Error Types
 *
 * `ApiError` is the single error type handlers return. Every failure from the
 * credential store, token service and stores is mapped onto it here, and it
 * is turned into an HTTP response in `conversion`.
 *
 * # Status Code Mapping
 *
 * - `Validation` - 400 Bad Request, with field-level errors
 * - `BadRequest` - 400 Bad Request, body could not be parsed
 * - `Duplicate` - 409 Conflict
 * - `InvalidCredentials`, `MissingToken`, `TokenExpired`, `TokenInvalid` - 401 Unauthorized
 * - `NotFound` - 404 Not Found
 * - `Internal` - 500 Internal Server Error (detail is logged, never sent)
 */
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::error::ValidationErrors;

pub const MISSING_TOKEN_MESSAGE: &str =
    "No token provided. Please provide a valid JWT token in Authorization header";
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token has expired";
pub const TOKEN_INVALID_MESSAGE: &str = "Invalid token";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Errors surfaced at the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("malformed request body: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no bearer token provided")]
    MissingToken,

    #[error("token expired")]
    TokenExpired,

    #[error("token invalid")]
    TokenInvalid,

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a not-found error with a client-facing message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error; `detail` is only logged
    pub fn internal(detail: impl ToString) -> Self {
        Self::Internal(detail.to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Duplicate(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::MissingToken | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::BadRequest(detail) => format!("Invalid request body: {detail}"),
            Self::Duplicate(message) | Self::NotFound(message) => message.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::MissingToken => MISSING_TOKEN_MESSAGE.to_string(),
            Self::TokenExpired => TOKEN_EXPIRED_MESSAGE.to_string(),
            Self::TokenInvalid => TOKEN_INVALID_MESSAGE.to_string(),
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Validation(errors) => Self::Validation(errors),
            CredentialError::DuplicateEmail => {
                Self::Duplicate("A user with this email already exists".to_string())
            }
            CredentialError::InvalidCredentials => Self::InvalidCredentials,
            CredentialError::Password(e) => Self::internal(e),
            CredentialError::Store(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::TokenExpired,
            TokenError::Invalid(_) => Self::TokenInvalid,
            TokenError::Signing(e) => Self::internal(e),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field } => Self::Duplicate(format!("Duplicate value for {field}")),
            other => Self::internal(other),
        }
    }
}
