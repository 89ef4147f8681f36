//! Blob store trait for pluggable key/value object backends.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::result::AppResult;

/// Metadata about a stored blob, as returned by [`BlobStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlobMeta {
    /// Key of the blob within the store.
    pub key: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Time the blob was last written (if the backend reports it).
    pub uploaded: Option<DateTime<Utc>>,
}

/// Trait for durable key → bytes backends.
///
/// Content blobs and the system records (admin config, share index) live in
/// the same namespace. Implementations exist for the local filesystem,
/// process memory and S3-compatible object stores; they are defined in
/// `notebin-storage`.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a blob. Returns `Ok(None)` when the key does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<Bytes>>;

    /// Write a blob, replacing any previous value under the key.
    async fn put(&self, key: &str, data: Bytes) -> AppResult<()>;

    /// Delete a blob. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// List up to `limit` blobs ordered by key.
    async fn list(&self, limit: usize) -> AppResult<Vec<BlobMeta>>;
}
