//! Share CRUD service.

use std::sync::Arc;

use tracing::info;

use notebin_core::error::AppError;
use notebin_entity::share::{Share, expiry_after};
use notebin_storage::records::ShareIndex;

use super::link::LinkService;
use crate::context::RequestContext;

/// Manages share creation, listing, and revocation.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share index.
    index: Arc<ShareIndex>,
    /// Link service for token generation.
    link_service: Arc<LinkService>,
}

/// Request to create a new share.
#[derive(Debug, Clone, Default)]
pub struct CreateShareRequest {
    /// Key of the content blob being shared.
    pub file_id: String,
    /// Shared secret. Empty means no password.
    pub password: String,
    /// Lifetime in seconds. `0` never expires.
    pub expire_seconds: u64,
    /// Cap on successful views. `0` is unlimited.
    pub max_visits: u32,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(index: Arc<ShareIndex>, link_service: Arc<LinkService>) -> Self {
        Self {
            index,
            link_service,
        }
    }

    /// Creates a new share and returns the stored descriptor.
    ///
    /// The referenced blob is not required to exist.
    pub async fn create_share(
        &self,
        ctx: &RequestContext,
        req: CreateShareRequest,
    ) -> Result<Share, AppError> {
        if req.file_id.is_empty() {
            return Err(AppError::validation("fileId is required"));
        }

        let now = ctx.request_time;
        let expire = expiry_after(now, req.expire_seconds)?;
        let token = self.link_service.generate_token();
        let share = Share::new(token, req.file_id, req.password, expire, req.max_visits, now);

        self.index.put(&share).await?;

        info!(
            actor = %ctx.username,
            token = %share.token,
            file_id = %share.file_id,
            expire = ?share.expire,
            max_visits = share.max_visits,
            protected = share.requires_password(),
            "Share created"
        );

        Ok(share)
    }

    /// Lists live shares, oldest first.
    ///
    /// Time-expired shares are removed from the index as a side effect.
    /// Shares that used up their visits are kept and listed.
    pub async fn list_shares(&self, ctx: &RequestContext) -> Result<Vec<Share>, AppError> {
        let (live, pruned) = self.index.prune_expired(ctx.request_time).await?;
        if pruned > 0 {
            info!(actor = %ctx.username, pruned, "Pruned expired shares");
        }
        Ok(live)
    }

    /// Deletes one share. Unknown tokens are not an error.
    pub async fn delete_share(&self, ctx: &RequestContext, token: &str) -> Result<bool, AppError> {
        let removed = self.index.delete(token).await?;
        info!(actor = %ctx.username, token, removed, "Share deleted");
        Ok(removed)
    }

    /// Deletes several shares in one index update. Returns how many existed.
    pub async fn batch_delete(
        &self,
        ctx: &RequestContext,
        tokens: &[String],
    ) -> Result<usize, AppError> {
        let removed = self.index.delete_many(tokens).await?;
        info!(
            actor = %ctx.username,
            requested = tokens.len(),
            removed,
            "Shares batch deleted"
        );
        Ok(removed)
    }

    /// Removes every share that points at `file_id`.
    pub async fn cascade_delete_by_file(&self, file_id: &str) -> Result<usize, AppError> {
        let removed = self.index.delete_by_file(file_id).await?;
        if removed > 0 {
            info!(file_id, removed, "Removed shares of deleted content");
        }
        Ok(removed)
    }
}
