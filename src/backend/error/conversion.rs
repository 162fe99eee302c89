/**
 * Error Conversion
 *
 * This module converts `ApiError` into an HTTP response so handlers and
 * middleware can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Validation failed: email: Please provide a valid email address",
 *   "errors": [{ "field": "email", "message": "Please provide a valid email address" }]
 * }
 * ```
 *
 * `errors` is only present for validation failures. Internal errors are
 * logged here with their detail and reach the client as a generic message.
 */
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::Validation(errors) => json!({
                "success": false,
                "message": self.message(),
                "errors": errors.errors(),
            }),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                json!({ "success": false, "message": self.message() })
            }
            _ => json!({ "success": false, "message": self.message() }),
        };

        (status, Json(body)).into_response()
    }
}
