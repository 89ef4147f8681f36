//! Admin config record.

use std::sync::Arc;

use bytes::Bytes;

use notebin_core::error::{AppError, ErrorKind};
use notebin_core::result::AppResult;
use notebin_core::traits::blob::BlobStore;
use notebin_entity::admin::AdminConfig;
use notebin_entity::keys::ADMIN_CONFIG_KEY;

/// Reads and writes the admin credential record.
#[derive(Debug, Clone)]
pub struct AdminConfigStore {
    store: Arc<dyn BlobStore>,
}

impl AdminConfigStore {
    /// Create a store over the given blob backend.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Load the admin config, or `None` before setup has run.
    pub async fn load(&self) -> AppResult<Option<AdminConfig>> {
        let Some(raw) = self.store.get(ADMIN_CONFIG_KEY).await? else {
            return Ok(None);
        };
        let config = serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Admin config record is corrupt", e)
        })?;
        Ok(Some(config))
    }

    /// Persist the admin config.
    pub async fn save(&self, config: &AdminConfig) -> AppResult<()> {
        let raw = serde_json::to_vec(config)?;
        self.store.put(ADMIN_CONFIG_KEY, Bytes::from(raw)).await
    }
}
