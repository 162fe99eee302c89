/**
 * Credential Store
 *
 * Owns the password contract for users: registration validates, hashes and
 * persists; login looks the user up and checks the password.
 *
 * # Registration Process
 *
 * 1. Normalise input (trim name, trim + lowercase email)
 * 2. Validate against `USER_RULES`
 * 3. Reject an email that is already registered
 * 4. Hash the password with bcrypt
 * 5. Persist; a unique-constraint failure here still maps to a duplicate
 *
 * # Login
 *
 * An unknown email and a wrong password produce the same error. When the
 * email is unknown the password is still checked against a dummy hash of the
 * same cost, so both paths take about the same time.
 */
use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::password::{hash_password, verify_password, PasswordError, PasswordHash};
use crate::backend::auth::users::{
    normalize_email, LoginRequest, NewUser, RegisterRequest, User, UserStore, LOGIN_RULES, USER_RULES,
};
use crate::backend::store::StoreError;
use crate::shared::error::ValidationErrors;
use crate::shared::validation::validate;

const DUMMY_PASSWORD: &str = "timing-equaliser";

/// Credential errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for CredentialError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field: "email" } => CredentialError::DuplicateEmail,
            other => CredentialError::Store(other),
        }
    }
}

/// Registration and password verification over a `UserStore`
pub struct CredentialStore {
    users: Arc<dyn UserStore>,
    cost: u32,
    dummy_hash: PasswordHash,
}

impl CredentialStore {
    /// Build a credential store hashing at `cost`
    pub async fn new(users: Arc<dyn UserStore>, cost: u32) -> Result<Self, CredentialError> {
        let dummy_hash = hash_password(DUMMY_PASSWORD.to_string(), cost).await?;
        Ok(Self {
            users,
            cost,
            dummy_hash,
        })
    }

    /// Validate, hash and persist a new user
    pub async fn register(&self, request: RegisterRequest) -> Result<User, CredentialError> {
        let request = RegisterRequest {
            name: request.name.map(|n| n.trim().to_string()),
            email: request.email.as_deref().map(normalize_email),
            password: request.password,
        };
        validate(&request, USER_RULES)?;

        let (name, email, password) = match (request.name, request.email, request.password) {
            (Some(name), Some(email), Some(password)) => (name, email, password),
            _ => return Err(ValidationErrors::single("body", "Please provide name, email and password").into()),
        };

        if self.users.email_exists(&email).await? {
            tracing::warn!("Registration rejected, email already registered: {}", email);
            return Err(CredentialError::DuplicateEmail);
        }

        let password_hash = hash_password(password, self.cost).await?;
        let user = self
            .users
            .insert_user(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!("User registered: {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Check an email/password pair, returning the matching user
    pub async fn verify_credentials(&self, request: LoginRequest) -> Result<User, CredentialError> {
        validate(&request, LOGIN_RULES)?;
        let email = normalize_email(request.email.as_deref().unwrap_or_default());
        let password = request.password.unwrap_or_default();

        match self.users.find_credentials_by_email(&email).await? {
            Some(stored) => {
                if verify_password(password, stored.password_hash).await? {
                    Ok(stored.user)
                } else {
                    tracing::warn!("Invalid password for user: {}", stored.user.id);
                    Err(CredentialError::InvalidCredentials)
                }
            }
            None => {
                verify_password(password, self.dummy_hash.clone()).await?;
                tracing::warn!("Login attempt for unknown email");
                Err(CredentialError::InvalidCredentials)
            }
        }
    }
}
