/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Hand the request body to the credential store
 * 2. The store normalises, validates, hashes and persists
 * 3. Return the new user (never the hash) with 201 Created
 *
 * # Errors
 *
 * - `400 Bad Request` - a field is missing or fails its rule
 * - `409 Conflict` - the email is already registered
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::auth::users::{RegisterRequest, User};
use crate::backend::error::ApiError;
use crate::shared::response::ApiResponse;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /api/users/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "analytical"
/// }
/// ```
pub async fn register(
    State(credentials): State<Arc<CredentialStore>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let Json(request) = payload?;
    let user = credentials.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("User registered successfully", user)),
    ))
}
