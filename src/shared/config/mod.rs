//! Application configuration module
//!
//! Provides the process-wide configuration, built once at startup from the
//! environment (and an optional `.env` file loaded by the binary) and then
//! passed explicitly into the services that need it.
//!
//! | Variable       | Meaning                                   | Default  |
//! |----------------|-------------------------------------------|----------|
//! | `JWT_SECRET`   | Token signing secret                      | required |
//! | `JWT_EXPIRE`   | Token lifetime (`3600`, `90m`, `12h`, `30d`) | `30d` |
//! | `BCRYPT_COST`  | bcrypt cost factor (4-31)                 | `10`     |
//! | `DATABASE_URL` | Postgres URL; unset uses the memory store | unset    |
//! | `PORT`         | Listen port                               | `5000`   |

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Default bcrypt cost factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Default token lifetime (30 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify tokens
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
    /// Postgres connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HTTP listen port
    pub port: u16,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(raw) = get("JWT_EXPIRE") {
            builder = builder.token_ttl(parse_duration(&raw)?);
        }
        if let Some(raw) = get("BCRYPT_COST") {
            let cost = raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: raw.clone(),
            })?;
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(raw) = get("PORT") {
            let port = raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
            })?;
            builder = builder.port(port);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_EXPIRE",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    port: Option<u16>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl.unwrap_or(DEFAULT_TOKEN_TTL),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            database_url: self.database_url,
            port: self.port.unwrap_or(DEFAULT_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a lifetime such as `3600`, `45s`, `90m`, `12h` or `30d`
pub fn parse_duration(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: "JWT_EXPIRE",
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    let amount: u64 = digits.parse().map_err(|_| invalid())?;

    let multiplier = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return Err(invalid()),
    };

    amount
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
