//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce the standard envelope with
//! `success: false`. [`FaultResponder`] turns handler panics into the same
//! shape with status 500.

use std::any::Any;
use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use persona_storage::StorageError;
use tower_http::catch_panic::ResponseForPanic;

use crate::config::RunMode;
use crate::schema::common::ApiResponse;

/// Message for a create request missing a required field.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide name, description, and role";

/// Message for any unhandled fault.
pub const FAULT_MESSAGE: &str = "Something went wrong!";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Entity or route not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500). `detail` is only shown to clients in
    /// development mode and is `None` otherwise.
    #[error("internal error")]
    Internal { detail: Option<String> },
}

impl ApiError {
    pub fn assistant_not_found(id: impl Display) -> Self {
        ApiError::NotFound(format!("Assistant with id {} not found", id))
    }

    pub fn route_not_found(path: impl Display) -> Self {
        ApiError::NotFound(format!("Route {} not found", path))
    }

    /// Builds a 500 error, keeping `detail` only when `mode` allows it.
    pub fn internal(detail: impl Into<String>, mode: RunMode) -> Self {
        ApiError::Internal {
            detail: mode.exposes_fault_detail().then(|| detail.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => ApiResponse::failure(msg),
            ApiError::Internal { detail } => ApiResponse {
                error: detail,
                ..ApiResponse::failure(FAULT_MESSAGE)
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(_) => ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()),
            StorageError::NotFound(id) => ApiError::assistant_not_found(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Converts a panic caught by `CatchPanicLayer` into a 500 envelope.
#[derive(Debug, Clone, Copy)]
pub struct FaultResponder {
    mode: RunMode,
}

impl FaultResponder {
    pub fn new(mode: RunMode) -> Self {
        FaultResponder { mode }
    }
}

impl ResponseForPanic for FaultResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = panic_message(err.as_ref());
        tracing::error!(panic = %detail, "handler panicked");
        ApiError::internal(detail, self.mode).into_response()
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use persona_core::{AssistantId, ValidationError};
    use serde_json::{json, Value};

    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_the_id() {
        let (status, body) = render(StorageError::NotFound(AssistantId(99)).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Assistant with id 99 not found" })
        );
    }

    #[tokio::test]
    async fn validation_maps_to_fixed_message() {
        let err: ApiError =
            StorageError::Validation(ValidationError::MissingFields(vec!["role"])).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn internal_detail_follows_mode() {
        let (status, body) = render(ApiError::internal("boom", RunMode::Production)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "success": false, "message": FAULT_MESSAGE }));

        let (_, body) = render(ApiError::internal("boom", RunMode::Development)).await;
        assert_eq!(body["error"], "boom");
    }

    #[tokio::test]
    async fn fault_responder_reads_str_and_string_payloads() {
        let mut responder = FaultResponder::new(RunMode::Development);

        let response = responder.response_for_panic(Box::new("static str"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "static str");

        let response = responder.response_for_panic(Box::new(String::from("owned")));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "owned");
    }
}
