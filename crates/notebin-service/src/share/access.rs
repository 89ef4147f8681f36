//! Share access control: resolves a share token into content.
//!
//! Checks run in a fixed order and the first failing one decides the
//! outcome: missing token, unknown token, expiry, visit cap, password,
//! then the content blob itself. Only a fully successful resolution counts
//! as a view, and the counter is bumped by a detached task after the caller
//! has its content.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use notebin_auth::credentials::secure_eq;
use notebin_core::error::{AppError, ErrorKind};
use notebin_core::traits::blob::BlobStore;
use notebin_storage::records::ShareIndex;

/// Content released by a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedContent {
    /// The share token that was resolved.
    pub token: String,
    /// Key of the content blob.
    pub file_id: String,
    /// Raw content bytes.
    pub body: Bytes,
}

impl SharedContent {
    /// The content as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Non-error outcome of resolving a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAccess {
    /// The link is password protected and no matching password was given.
    NeedsPassword {
        /// The share token, for re-submitting the form.
        token: String,
        /// Whether a password was supplied and did not match.
        rejected: bool,
    },
    /// The link is valid and the content was fetched.
    Granted(SharedContent),
}

/// Handles public share access.
#[derive(Debug, Clone)]
pub struct AccessService {
    /// Share index.
    index: Arc<ShareIndex>,
    /// Blob store holding the shared content.
    store: Arc<dyn BlobStore>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(index: Arc<ShareIndex>, store: Arc<dyn BlobStore>) -> Self {
        Self { index, store }
    }

    /// Resolves a share token at the current time.
    ///
    /// Does not count the view; call [`AccessService::record_view_detached`]
    /// once the content has been handed out.
    pub async fn resolve(
        &self,
        token: Option<&str>,
        password: Option<&str>,
    ) -> Result<ShareAccess, AppError> {
        self.resolve_at(token, password, Utc::now()).await
    }

    /// Resolves a share token as of `now`.
    pub async fn resolve_at(
        &self,
        token: Option<&str>,
        password: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ShareAccess, AppError> {
        let token = match token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AppError::invalid_link("Missing share token")),
        };

        let share = self
            .index
            .get(token)
            .await?
            .ok_or_else(|| AppError::link_not_found("Share link does not exist or was deleted"))?;

        if share.is_expired_at(now) {
            return Err(AppError::link_expired("Share link has expired"));
        }

        if share.is_exhausted() {
            return Err(AppError::link_exhausted(
                "Share link has reached its visit limit",
            ));
        }

        if share.requires_password() {
            match password {
                Some(supplied) if secure_eq(supplied, &share.password) => {}
                supplied => {
                    debug!(token, "Share password required");
                    return Ok(ShareAccess::NeedsPassword {
                        token: token.to_string(),
                        rejected: supplied.is_some(),
                    });
                }
            }
        }

        // A key the store cannot hold can never have content behind it.
        let body = match self.store.get(&share.file_id).await {
            Ok(Some(body)) => body,
            Ok(None) => {
                return Err(AppError::source_missing(
                    "Share exists but its content has been deleted",
                ));
            }
            Err(e) if e.kind == ErrorKind::Validation => {
                return Err(AppError::source_missing(format!(
                    "Share points at an unusable content id: {}",
                    share.file_id
                )));
            }
            Err(e) => return Err(e),
        };

        Ok(ShareAccess::Granted(SharedContent {
            token: share.token,
            file_id: share.file_id,
            body,
        }))
    }

    /// Counts one view of `token` in the background.
    ///
    /// The task re-reads the index, so a share deleted in the meantime is
    /// not recreated. Failures are logged and otherwise ignored.
    pub fn record_view_detached(&self, token: String) -> JoinHandle<()> {
        let index = Arc::clone(&self.index);
        tokio::spawn(async move {
            match index.increment_views(&token).await {
                Ok(Some(views)) => debug!(token = %token, views, "Share view recorded"),
                Ok(None) => debug!(token = %token, "Share vanished before its view was recorded"),
                Err(e) => warn!(token = %token, error = %e, "Failed to record share view"),
            }
        })
    }

    /// Fetches content directly for an admin preview. Bypasses the share
    /// index entirely and counts nothing.
    pub async fn preview(&self, file_id: &str) -> Result<Bytes, AppError> {
        if file_id.is_empty() {
            return Err(AppError::validation("Missing content id"));
        }
        self.store
            .get(file_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Content not found: {file_id}")))
    }
}
