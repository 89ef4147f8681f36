//! Convenience result type alias for Notebin.

use crate::error::AppError;

/// A specialized `Result` type for Notebin operations.
pub type AppResult<T> = Result<T, AppError>;
