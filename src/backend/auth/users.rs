/**
 * User Model and Database Operations
 *
 * This module defines the user record, the registration/login inputs with
 * their rule sets, and the `UserStore` persistence port with its Postgres
 * implementation.
 *
 * Input fields are optional so that a missing field is reported as a
 * validation error rather than a body parse failure.
 *
 * # Read Projection
 *
 * `User` never carries the password hash. The hash is only returned by
 * `find_credentials_by_email`, which exists solely for login.
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::password::PasswordHash;
use crate::backend::store::{map_unique_violation, PgStore, StoreError};
use crate::shared::validation::{FieldRule, FieldValue, Fields, Rule};

/// Longest accepted display name
pub const NAME_MAX_LENGTH: usize = 50;
/// Longest accepted email address
pub const EMAIL_MAX_LENGTH: usize = 254;
/// Shortest accepted password
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Constraints checked on registration
pub const USER_RULES: &[FieldRule] = &[
    FieldRule::new("name", Rule::Required, "Please provide a name"),
    FieldRule::new("name", Rule::MaxLength(NAME_MAX_LENGTH), "Name cannot exceed 50 characters"),
    FieldRule::new("email", Rule::Required, "Please provide an email"),
    FieldRule::new("email", Rule::MaxLength(EMAIL_MAX_LENGTH), "Email cannot exceed 254 characters"),
    FieldRule::new("email", Rule::Email, "Please provide a valid email address"),
    FieldRule::new("password", Rule::Required, "Please provide a password"),
    FieldRule::new(
        "password",
        Rule::MinLength(PASSWORD_MIN_LENGTH),
        "Password must be at least 6 characters",
    ),
];

/// Constraints checked on login
pub const LOGIN_RULES: &[FieldRule] = &[
    FieldRule::new("email", Rule::Required, "Please provide email and password"),
    FieldRule::new("password", Rule::Required, "Please provide email and password"),
];

/// Registration input
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name (at most 50 characters)
    pub name: Option<String>,
    /// Email address, matched case-insensitively
    pub email: Option<String>,
    /// Plaintext password (at least 6 characters, hashed before storage)
    pub password: Option<String>,
}

impl Fields for RegisterRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => self.name.as_deref().into(),
            "email" => self.email.as_deref().into(),
            "password" => self.password.as_deref().into(),
            _ => FieldValue::Missing,
        }
    }
}

/// Login input
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Fields for LoginRequest {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "email" => self.email.as_deref().into(),
            "password" => self.password.as_deref().into(),
            _ => FieldValue::Missing,
        }
    }
}

/// User struct representing a user in the store (no password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Lowercased, unique email address
    pub email: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// A validated user about to be persisted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: PasswordHash,
}

/// A user together with their stored password hash
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user: User,
    pub password_hash: PasswordHash,
}

/// Canonical form of an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Persistence port for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `StoreError::Duplicate` when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Whether a user with this (normalised) email exists
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Fetch a user and their password hash by (normalised) email
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, StoreError>;
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CredentialsRow> for StoredCredentials {
    fn from(row: CredentialsRow) -> Self {
        Self {
            user: User {
                id: row.id,
                name: row.name,
                email: row.email,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            password_hash: PasswordHash::from_stored(row.password_hash),
        }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.password_hash.as_str())
        .bind(now)
        .bind(now)
        .fetch_one(self.pool())
        .await
        .map_err(|e| map_unique_violation(e, "email"))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(self.pool())
            .await?;
        Ok(exists)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, StoreError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(StoredCredentials::from))
    }
}
