//! Authentication test helpers
//!
//! Provides utilities for registering users, logging in and building
//! bearer headers against a running test server.

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use uuid::Uuid;

/// Default password for helper-created users
pub const TEST_PASSWORD: &str = "correct-horse";

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Send a registration request
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/users/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await
}

/// Send a login request
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/users/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Register and log in a user with a unique email
pub async fn create_test_user(server: &TestServer) -> TestUser {
    let email = format!("reader-{}@example.com", Uuid::new_v4().simple());
    let name = "Test Reader".to_string();

    let response = register(server, &name, &email, TEST_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "register failed: {}", response.text());
    let id = response.json::<Value>()["data"]["id"]
        .as_str()
        .expect("user id in response")
        .to_string();

    let response = login(server, &email, TEST_PASSWORD).await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());
    let token = response.json::<Value>()["token"]
        .as_str()
        .expect("token in response")
        .to_string();

    TestUser {
        id,
        name,
        email,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}

/// `Authorization: Bearer <token>`
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("token is a valid header value");
    (header::AUTHORIZATION, value)
}
