//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A test server over the in-memory store
//! - Postgres fixtures, active only when `DATABASE_URL` is set
//! - Authentication test helpers
//! - Envelope assertions
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;

use axum_test::TestServer;
use book_catalog::backend::server::create_app;
use book_catalog::shared::config::AppConfig;

/// Lowest bcrypt cost, keeps hashing fast in tests
pub const TEST_COST: u32 = 4;

/// Signing secret shared by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration for an in-memory test server
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(TEST_COST)
        .build()
        .expect("test config is valid")
}

/// Start a test server with the default test configuration
pub async fn test_server() -> TestServer {
    test_server_with(test_config()).await
}

/// Start a test server with a custom configuration
pub async fn test_server_with(config: AppConfig) -> TestServer {
    let app = create_app(&config).await.expect("app initialises");
    TestServer::new(app).expect("test server starts")
}
