//! Unified application error types for Notebin.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Share-link failures get their own
//! kinds so the HTTP layer can give each one a distinct status.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A share request arrived without a token.
    InvalidLink,
    /// The share token is not present in the share index.
    LinkNotFound,
    /// The share link is past its expiry time.
    LinkExpired,
    /// The share link has used up all of its allowed views.
    LinkExhausted,
    /// The share record exists but the content it points to does not.
    SourceMissing,
    /// The requested resource was not found.
    NotFound,
    /// No valid admin session was presented.
    Unauthorized,
    /// The caller is not allowed to see this page.
    Forbidden,
    /// Input validation failed.
    Validation,
    /// The operation conflicts with existing state (e.g. setup done twice).
    Conflict,
    /// The underlying blob store failed.
    Storage,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLink => write!(f, "INVALID_LINK"),
            Self::LinkNotFound => write!(f, "LINK_NOT_FOUND"),
            Self::LinkExpired => write!(f, "LINK_EXPIRED"),
            Self::LinkExhausted => write!(f, "LINK_EXHAUSTED"),
            Self::SourceMissing => write!(f, "SOURCE_MISSING"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Notebin.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-link error.
    pub fn invalid_link(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLink, message)
    }

    /// Create a link-not-found error.
    pub fn link_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkNotFound, message)
    }

    /// Create a link-expired error.
    pub fn link_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkExpired, message)
    }

    /// Create a link-exhausted error.
    pub fn link_exhausted(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LinkExhausted, message)
    }

    /// Create a source-missing error.
    pub fn source_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceMissing, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error ends the share resolution with a "link unusable" outcome.
    pub fn is_share_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidLink
                | ErrorKind::LinkNotFound
                | ErrorKind::LinkExpired
                | ErrorKind::LinkExhausted
                | ErrorKind::SourceMissing
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
