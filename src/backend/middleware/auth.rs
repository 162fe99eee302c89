/**
 * Authentication Middleware
 *
 * This module provides the gate in front of every mutating book route. It
 * extracts the bearer token from the `Authorization` header, verifies it
 * with the token service, and either attaches the caller's identity to the
 * request or ends the request with 401.
 *
 * # Per-request flow
 *
 * 1. No header, or a scheme other than `Bearer ` → 401 "No token provided"
 *    (the token is taken verbatim after the single space; padding is not
 *    stripped and fails verification)
 * 2. Token expired → 401 "Token has expired"
 * 3. Bad signature or malformed → 401 "Invalid token"
 * 4. Otherwise `AuthenticatedUser` is inserted into request extensions and
 *    the next handler runs
 */
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingToken)
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing, expired or invalid.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).inspect_err(|_| {
        tracing::warn!("Rejected {} {}: missing bearer token", request.method(), request.uri().path());
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id: claims.sub });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`; elsewhere it rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<AuthenticatedUser>().cloned().ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            ApiError::MissingToken
        })?;

        Ok(AuthUser(user))
    }
}
