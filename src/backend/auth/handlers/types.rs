/**
 * Authentication Handler Types
 *
 * Response types for the register and login handlers. The request bodies are
 * the credential store's own inputs and live in `auth::users`.
 */
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

pub use crate::backend::auth::users::{LoginRequest, RegisterRequest};

/// Login response
///
/// Carries the bearer token next to the user it was issued for.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub data: User,
}
