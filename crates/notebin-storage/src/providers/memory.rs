//! In-process blob store, used for tests and ephemeral deployments.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use notebin_core::result::AppResult;
use notebin_core::traits::blob::{BlobMeta, BlobStore};

use super::validate_key;

/// Blob store backed by a concurrent map. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<DashMap<String, (Bytes, DateTime<Utc>)>>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn get(&self, key: &str) -> AppResult<Option<Bytes>> {
        validate_key(key)?;
        Ok(self.blobs.get(key).map(|entry| entry.value().0.clone()))
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        validate_key(key)?;
        debug!(key, bytes = data.len(), "Stored blob in memory");
        self.blobs.insert(key.to_string(), (data, Utc::now()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        self.blobs.remove(key);
        Ok(())
    }

    async fn list(&self, limit: usize) -> AppResult<Vec<BlobMeta>> {
        let mut entries: Vec<BlobMeta> = self
            .blobs
            .iter()
            .map(|entry| BlobMeta {
                key: entry.key().clone(),
                size_bytes: entry.value().0.len() as u64,
                uploaded: Some(entry.value().1),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries.truncate(limit);
        Ok(entries)
    }
}
