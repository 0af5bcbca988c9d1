//! Common API response envelope.
//!
//! [`ApiResponse`] is the uniform wrapper for every body the server returns,
//! success or failure: `{ success, message?, count?, data?, error? }`.

use serde::Serialize;

/// Standard API response envelope.
///
/// Absent optional parts are omitted from the JSON rather than serialized as
/// `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// `true` for 2xx responses, `false` otherwise.
    pub success: bool,
    /// Human-readable status line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of items in `data`, for listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Fault detail; only filled in development mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Create a successful listing response; `count` mirrors `items.len()`.
    pub fn listing(items: Vec<T>) -> Self {
        let count = items.len();
        ApiResponse {
            count: Some(count),
            ..ApiResponse::ok(items)
        }
    }
}

impl ApiResponse<()> {
    /// Create a failure response with no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error: None,
        }
    }
}
