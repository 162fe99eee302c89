/**
 * JSON Response Envelope
 *
 * Every JSON body the API returns carries a `success` flag and a
 * human-readable `message`. Successful responses put their payload under
 * `data`.
 */
use serde::{Deserialize, Serialize};

/// Success envelope: `{"success": true, "message": ..., "data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a successful envelope
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
