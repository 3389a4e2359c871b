//! # API Error Type
//!
//! Maps service failures onto HTTP responses.
//!
//! ## Error Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CoreError / body rejection          ErrorCode          HTTP            │
//! │  ─────────────────────────────       ─────────────      ────            │
//! │  unreadable JSON body         ──►    InvalidJson    ──► 400             │
//! │  CoreError::InvalidReceipt    ──►    InvalidReceipt ──► 400             │
//! │  CoreError::ReceiptNotFound   ──►    NotFound       ──► 404             │
//! │  CoreError::PointsCalculation ──►    Internal       ──► 500             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The body is always `{"error": "<message>"}`. Internal details are logged
//! here and never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{CoreError, ErrorKind, ErrorResponse};

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request body is not a receipt (400)
    InvalidJson,

    /// Receipt failed validation (400)
    InvalidReceipt,

    /// Receipt id unknown (404)
    NotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidJson | ErrorCode::InvalidReceipt => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error returned from HTTP handlers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message, sent as the response body
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_json() -> Self {
        Self::new(ErrorCode::InvalidJson, "Invalid JSON payload")
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err.kind() {
            ErrorKind::InvalidReceipt => ApiError::new(ErrorCode::InvalidReceipt, err.to_string()),
            ErrorKind::NotFound => ApiError::new(ErrorCode::NotFound, "Receipt not found"),
            ErrorKind::Internal => {
                tracing::error!(error = %err, "receipt processing failed after validation");
                ApiError::new(ErrorCode::Internal, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };
        (self.code.status(), Json(body)).into_response()
    }
}
