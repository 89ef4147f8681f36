//! Share link value object.

use serde::{Deserialize, Serialize};

/// A generated share link for external access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    /// The share token.
    pub token: String,
    /// The full URL for accessing the share.
    pub url: String,
    /// Whether the link is password-protected.
    pub is_password_protected: bool,
    /// When the link expires (if set), in epoch milliseconds.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ShareLink {
    /// Build the public URL for `token` under `origin` (no trailing slash).
    pub fn url_for(origin: &str, token: &str) -> String {
        format!("{}/share?k={token}", origin.trim_end_matches('/'))
    }
}
