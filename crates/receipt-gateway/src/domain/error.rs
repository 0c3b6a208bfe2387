//! API error envelope and gateway-level errors.
//!
//! Every failure leaves the gateway as `{"description": <message>}` with a
//! matching HTTP status.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ReceiptError;
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub const INVALID_RECEIPT: &str = "The receipt is invalid.";
pub const RECEIPT_NOT_FOUND: &str = "No receipt found for that ID.";
pub const REQUEST_TIMEOUT: &str = "Request timed out.";

/// User-facing API error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub description: String,
}

impl ApiError {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    /// Malformed body or failed validation
    pub fn invalid_receipt() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_RECEIPT)
    }

    /// No receipt stored under the requested id
    pub fn receipt_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND)
    }

    /// Request exceeded the configured timeout
    pub fn timeout() -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT, REQUEST_TIMEOUT)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.description)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<ReceiptError> for ApiError {
    fn from(e: ReceiptError) -> Self {
        match e {
            ReceiptError::Invalid(_) => ApiError::invalid_receipt(),
            ReceiptError::NotFound(_) => ApiError::receipt_not_found(),
        }
    }
}

// Undecodable bodies share the validation-failure message.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "Rejected receipt body");
        ApiError::invalid_receipt()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (process lifecycle, not user-facing)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server terminated with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Logging subscriber could not be installed
    #[error("logging initialization failed: {0}")]
    Logging(String),
}
