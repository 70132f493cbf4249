//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Checkout API                       │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /get-order                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Json<T>, ApiError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ─────── JsonRejection ─────────────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Service failure? ─── OrderError ──────────── ApiError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄── 400 {"error": "invalid submitted request: ..."}                    │
//! │  ◄── 404 {"error": "order not found: ..."}                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `code` never goes on the wire; clients only see `{"error": message}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use checkout_core::ErrorResponse;
use checkout_orders::OrderError;
use tracing::warn;

/// API error returned from handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Machine-readable error kind, used for status mapping and logs
    pub code: ErrorCode,

    /// Human-readable message sent as `{"error": ...}`
    pub message: String,
}

/// Error kinds for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Request body could not be decoded (400)
    MalformedBody,

    /// Input validation failed (400)
    InvalidRequest,

    /// Cart references an unknown item (400)
    ItemNotFound,

    /// Order total out of range (400)
    IntegerOverflow,

    /// Order id is well-formed but unknown (404)
    NotFound,
}

impl ErrorCode {
    /// HTTP status for this kind of failure.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::MalformedBody
            | ErrorCode::InvalidRequest
            | ErrorCode::ItemNotFound
            | ErrorCode::IntegerOverflow => StatusCode::BAD_REQUEST,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// HTTP status this error is answered with.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let code = match &err {
            OrderError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            OrderError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            OrderError::IntegerOverflow { .. } => ErrorCode::IntegerOverflow,
            OrderError::OrderNotFound(_) => ErrorCode::NotFound,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::MalformedBody, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(code = ?self.code, status = status.as_u16(), error = %self.message, "Request failed");
        (status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;
