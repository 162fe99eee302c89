/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Verify the email/password pair with the credential store
 * 2. Issue a bearer token for the user's id
 * 3. Return the token and the user
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 with the same message
 * - Tokens expire after the configured lifetime (`JWT_EXPIRE`)
 * - Password hashes are never returned in responses
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::credentials::CredentialStore;
use crate::backend::auth::handlers::types::LoginResponse;
use crate::backend::auth::users::LoginRequest;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing
/// * `401 Unauthorized` - If the user is not found or the password is incorrect
/// * `500 Internal Server Error` - If the store or token signing fails
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "message": "Login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "data": { "id": "...", "name": "Ada", "email": "ada@example.com" }
/// }
/// ```
pub async fn login(
    State(credentials): State<Arc<CredentialStore>>,
    State(tokens): State<Arc<TokenService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    let user = credentials.verify_credentials(request).await?;
    let token = tokens.issue(user.id)?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        data: user,
    }))
}
