//! Share index record.
//!
//! All share descriptors live in one JSON object keyed by token under
//! [`SHARE_INDEX_KEY`]. Every mutation loads the whole object, edits it and
//! writes it back. Within one process mutations are serialized by an async
//! mutex; across processes the last write wins.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use notebin_core::error::{AppError, ErrorKind};
use notebin_core::result::AppResult;
use notebin_core::traits::blob::BlobStore;
use notebin_entity::keys::SHARE_INDEX_KEY;
use notebin_entity::share::Share;

/// Persisted form of a descriptor. The token is the map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredShare {
    file_id: String,
    #[serde(default)]
    password: String,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    expire: Option<DateTime<Utc>>,
    #[serde(default)]
    max_visits: u32,
    #[serde(default)]
    views: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created: DateTime<Utc>,
}

impl StoredShare {
    fn into_share(self, token: String) -> Share {
        Share {
            token,
            file_id: self.file_id,
            password: self.password,
            expire: self.expire,
            max_visits: self.max_visits,
            views: self.views,
            created: self.created,
        }
    }
}

impl From<&Share> for StoredShare {
    fn from(share: &Share) -> Self {
        Self {
            file_id: share.file_id.clone(),
            password: share.password.clone(),
            expire: share.expire,
            max_visits: share.max_visits,
            views: share.views,
            created: share.created,
        }
    }
}

type IndexMap = BTreeMap<String, StoredShare>;

/// The share index: token → descriptor.
#[derive(Debug, Clone)]
pub struct ShareIndex {
    store: Arc<dyn BlobStore>,
    write_lock: Arc<Mutex<()>>,
}

impl ShareIndex {
    /// Create an index over the given blob backend.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> AppResult<IndexMap> {
        let Some(raw) = self.store.get(SHARE_INDEX_KEY).await? else {
            return Ok(IndexMap::new());
        };
        serde_json::from_slice(&raw)
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Share index is corrupt", e))
    }

    async fn save(&self, index: &IndexMap) -> AppResult<()> {
        let raw = serde_json::to_vec(index)?;
        self.store.put(SHARE_INDEX_KEY, Bytes::from(raw)).await?;
        debug!(entries = index.len(), "Saved share index");
        Ok(())
    }

    fn sorted(index: IndexMap) -> Vec<Share> {
        let mut shares: Vec<Share> = index
            .into_iter()
            .map(|(token, stored)| stored.into_share(token))
            .collect();
        shares.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.token.cmp(&b.token)));
        shares
    }

    /// Look up one descriptor.
    pub async fn get(&self, token: &str) -> AppResult<Option<Share>> {
        let mut index = self.load().await?;
        Ok(index
            .remove(token)
            .map(|stored| stored.into_share(token.to_string())))
    }

    /// All descriptors, oldest first.
    pub async fn scan(&self) -> AppResult<Vec<Share>> {
        Ok(Self::sorted(self.load().await?))
    }

    /// Insert or replace a descriptor.
    pub async fn put(&self, share: &Share) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut index = self.load().await?;
        index.insert(share.token.clone(), StoredShare::from(share));
        self.save(&index).await
    }

    /// Remove one descriptor. Returns whether it existed; the index is only
    /// rewritten when it did.
    pub async fn delete(&self, token: &str) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut index = self.load().await?;
        if index.remove(token).is_none() {
            return Ok(false);
        }
        self.save(&index).await?;
        Ok(true)
    }

    /// Remove several descriptors in one read-modify-write. Unknown tokens
    /// are ignored. Returns how many were removed.
    pub async fn delete_many<S: AsRef<str>>(&self, tokens: &[S]) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut index = self.load().await?;
        let removed = tokens
            .iter()
            .filter(|token| {
                let token: &str = token.as_ref();
                index.remove(token).is_some()
            })
            .count();
        if removed > 0 {
            self.save(&index).await?;
        }
        Ok(removed)
    }

    /// Remove every descriptor pointing at `file_id`.
    pub async fn delete_by_file(&self, file_id: &str) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut index = self.load().await?;
        let before = index.len();
        index.retain(|_, stored| stored.file_id != file_id);
        let removed = before - index.len();
        if removed > 0 {
            self.save(&index).await?;
        }
        Ok(removed)
    }

    /// Drop descriptors that are past their expiry at `now` and return the
    /// survivors, oldest first, with the number removed. Visit-exhausted
    /// descriptors are kept.
    pub async fn prune_expired(&self, now: DateTime<Utc>) -> AppResult<(Vec<Share>, usize)> {
        let _guard = self.write_lock.lock().await;
        let mut index = self.load().await?;
        let before = index.len();
        index.retain(|_, stored| !matches!(stored.expire, Some(expire) if now > expire));
        let removed = before - index.len();
        if removed > 0 {
            self.save(&index).await?;
        }
        Ok((Self::sorted(index), removed))
    }

    /// Increment the view counter of an existing descriptor, returning the
    /// new count. A descriptor deleted in the meantime is left alone.
    pub async fn increment_views(&self, token: &str) -> AppResult<Option<u32>> {
        let _guard = self.write_lock.lock().await;
        let mut index = self.load().await?;
        let Some(stored) = index.get_mut(token) else {
            return Ok(None);
        };
        stored.views = stored.views.saturating_add(1);
        let views = stored.views;
        self.save(&index).await?;
        Ok(Some(views))
    }
}
