//! Content CRUD service.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use notebin_core::error::AppError;
use notebin_core::traits::blob::{BlobMeta, BlobStore};
use notebin_entity::keys::{RESERVED_KEYS, is_reserved_key};

use crate::context::RequestContext;
use crate::share::{LinkService, ShareService};

/// Saves, reads, deletes and lists content blobs.
#[derive(Debug, Clone)]
pub struct ContentService {
    /// Blob store holding the content.
    store: Arc<dyn BlobStore>,
    /// Share service, for cascading deletes.
    shares: Arc<ShareService>,
    /// Link service for generating content ids.
    link_service: Arc<LinkService>,
    /// Maximum entries returned by [`ContentService::list`].
    list_limit: usize,
}

impl ContentService {
    /// Creates a new content service.
    pub fn new(
        store: Arc<dyn BlobStore>,
        shares: Arc<ShareService>,
        link_service: Arc<LinkService>,
        list_limit: usize,
    ) -> Self {
        Self {
            store,
            shares,
            link_service,
            list_limit,
        }
    }

    /// Stores `code` under `id` (trimmed), or under a fresh 8-character id
    /// when none is given. Returns the id used.
    pub async fn save(
        &self,
        ctx: &RequestContext,
        id: Option<&str>,
        code: &str,
    ) -> Result<String, AppError> {
        let id = match id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.link_service.generate_content_id(),
        };
        if code.is_empty() {
            return Err(AppError::validation("Content must not be empty"));
        }
        if is_reserved_key(&id) {
            return Err(AppError::validation(format!("'{id}' is a reserved name")));
        }

        self.store
            .put(&id, Bytes::copy_from_slice(code.as_bytes()))
            .await?;

        info!(actor = %ctx.username, id = %id, bytes = code.len(), "Content saved");
        Ok(id)
    }

    /// Reads the content stored under `id` as text.
    pub async fn get(&self, _ctx: &RequestContext, id: &str) -> Result<String, AppError> {
        if id.is_empty() {
            return Err(AppError::validation("Missing content id"));
        }
        let body = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Content not found: {id}")))?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Deletes the content under `id` and every share pointing at it.
    /// Returns the number of shares removed.
    pub async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<usize, AppError> {
        if id.is_empty() || is_reserved_key(id) {
            return Err(AppError::validation("This content cannot be deleted"));
        }

        self.store.delete(id).await?;
        let removed_shares = self.shares.cascade_delete_by_file(id).await?;

        info!(actor = %ctx.username, id, removed_shares, "Content deleted");
        Ok(removed_shares)
    }

    /// Lists stored content, excluding system records.
    pub async fn list(&self, _ctx: &RequestContext) -> Result<Vec<BlobMeta>, AppError> {
        let mut entries = self
            .store
            .list(self.list_limit.saturating_add(RESERVED_KEYS.len()))
            .await?;
        entries.retain(|meta| !is_reserved_key(&meta.key));
        entries.truncate(self.list_limit);
        Ok(entries)
    }
}
