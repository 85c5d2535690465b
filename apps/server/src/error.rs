//! # API Error Type
//!
//! Unified error type for route handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Minimart                               │
//! │                                                                         │
//! │  CoreError::InvalidRequest ───► 400  {"error": "<message>"}            │
//! │  CoreError::ProductNotFound ──► 404  {"error": "Product not found"}    │
//! │  CoreError::ItemNotFound ─────► 404  {"message": "Item not found"}     │
//! │  StoreError::* ───────────────► 500  {"error": "Internal Server        │
//! │                                       Error"} (details logged only)    │
//! │                                                                         │
//! │  The item-not-found body uses a "message" key; every other error       │
//! │  uses "error". That asymmetry is part of the API contract.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use minimart_core::CoreError;
use minimart_store::StoreError;

/// API error returned from route handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error category (drives status and body shape).
    pub code: ErrorCode,

    /// Human-readable error message for the client.
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed or missing input (400).
    InvalidRequest,

    /// Product id not in the catalog (404).
    ProductNotFound,

    /// No cart line for the given id (404).
    ItemNotFound,

    /// Persistence failure or any other unexpected error (500).
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a 400 invalid-request error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates a generic 500. The cause must already have been logged.
    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, "Internal Server Error")
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest(message) => {
                ApiError::new(ErrorCode::InvalidRequest, message)
            }
            CoreError::ProductNotFound(_) => {
                ApiError::new(ErrorCode::ProductNotFound, "Product not found")
            }
            CoreError::ItemNotFound(_) => ApiError::new(ErrorCode::ItemNotFound, "Item not found"),
        }
    }
}

/// Converts store errors to API errors.
///
/// Persistence failures are logged with full detail and surfaced to the
/// client as a generic internal error, never with internals attached.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Persistence failure");
        ApiError::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::ProductNotFound | ErrorCode::ItemNotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Item-not-found keeps its historical "message" envelope.
        let body = match self.code {
            ErrorCode::ItemNotFound => json!({ "message": self.message }),
            _ => json!({ "error": self.message }),
        };

        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
