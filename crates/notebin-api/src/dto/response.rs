//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notebin_core::traits::blob::BlobMeta;
use notebin_entity::share::{Share, ShareLink};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Blob store provider in use.
    pub storage: String,
}

/// Response to a successful share creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateShareResponse {
    /// Always `true`.
    pub success: bool,
    /// Token and public URL.
    #[serde(flatten)]
    pub link: ShareLink,
}

/// A share as shown in the admin list. The password itself is never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSummary {
    /// Share token.
    pub token: String,
    /// Content id.
    pub file_id: String,
    /// Whether a password is required.
    pub has_password: bool,
    /// Expiry in epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub expire: Option<DateTime<Utc>>,
    /// View cap (0 = unlimited).
    pub max_visits: u32,
    /// Views so far.
    pub views: u32,
    /// Creation time in epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
}

impl From<Share> for ShareSummary {
    fn from(share: Share) -> Self {
        Self {
            has_password: share.requires_password(),
            token: share.token,
            file_id: share.file_id,
            expire: share.expire,
            max_visits: share.max_visits,
            views: share.views,
            created: share.created,
        }
    }
}

/// Share list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareListResponse {
    /// Always `true`.
    pub success: bool,
    /// Live shares, oldest first.
    pub shares: Vec<ShareSummary>,
}

/// A content entry in the admin list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Content id.
    pub key: String,
    /// Size in bytes.
    pub size: u64,
    /// Last write time.
    pub uploaded: Option<DateTime<Utc>>,
}

impl From<BlobMeta> for ContentEntry {
    fn from(meta: BlobMeta) -> Self {
        Self {
            key: meta.key,
            size: meta.size_bytes,
            uploaded: meta.uploaded,
        }
    }
}

/// Content list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentListResponse {
    /// Always `true`.
    pub success: bool,
    /// Stored content, system records excluded.
    pub files: Vec<ContentEntry>,
}
