//! Maps domain `AppError` to HTTP responses.

#[allow(unused_imports)]
use axum::http::StatusCode;
#[allow(unused_imports)]
use axum::response::IntoResponse;

#[allow(unused_imports)]
use notebin_core::error::{AppError, ErrorKind};

// The `IntoResponse for AppError` impl must live in `notebin-core` (orphan
// rule); these re-exports keep the `crate::error::*` paths unchanged.
pub use notebin_core::http::{ApiErrorResponse, log_if_server_error, status_for};
