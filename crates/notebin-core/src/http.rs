//! Maps domain `AppError` to HTTP responses.
//!
//! Lives in `notebin-core` because Rust's orphan rule requires the
//! `IntoResponse` impl to sit in the crate that defines `AppError`;
//! `notebin-api::error` re-exports these items.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidLink | ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::LinkNotFound | ErrorKind::SourceMissing | ErrorKind::NotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorKind::LinkExpired | ErrorKind::LinkExhausted => StatusCode::GONE,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Storage
        | ErrorKind::Serialization
        | ErrorKind::Configuration
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs server-side failures once, at the point they become a response.
pub fn log_if_server_error(err: &AppError) {
    if status_for(err.kind).is_server_error() {
        tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(self.kind);
        log_if_server_error(&self);

        let body = ApiErrorResponse {
            error: self.kind.to_string(),
            message: self.message.clone(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}
