//! Envelope assertions
//!
//! Every response body is `{"success", "message", ...}`; these helpers check
//! status, flag and message together so failures print the whole body.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert a successful envelope and return its `data`
pub fn assert_success(response: &TestResponse, status: StatusCode, message: &str) -> Value {
    assert_eq!(response.status_code(), status, "unexpected status, body: {}", response.text());
    let body: Value = response.json();
    assert_eq!(body["success"], true, "body: {body}");
    assert_eq!(body["message"], message, "body: {body}");
    body["data"].clone()
}

/// Assert a failure envelope and return the whole body
pub fn assert_failure(response: &TestResponse, status: StatusCode, message: &str) -> Value {
    assert_eq!(response.status_code(), status, "unexpected status, body: {}", response.text());
    let body: Value = response.json();
    assert_eq!(body["success"], false, "body: {body}");
    assert_eq!(body["message"], message, "body: {body}");
    body
}

/// Assert a 400 whose `errors` mention `field`
pub fn assert_field_error(response: &TestResponse, field: &str) {
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {}", response.text());
    let body: Value = response.json();
    let errors = body["errors"].as_array().expect("errors array");
    assert!(
        errors.iter().any(|e| e["field"] == field),
        "no error for {field} in {body}"
    );
}
