//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notebin_core::config::AppConfig;
use notebin_core::traits::blob::BlobStore;
use notebin_service::{AccessService, AdminService, ContentService, LinkService, ShareService};
use notebin_storage::records::{AdminConfigStore, ShareIndex};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Blob store holding content and system records
    pub store: Arc<dyn BlobStore>,

    // ── Services ─────────────────────────────────────────────
    /// Admin setup, login and session checks
    pub admin_service: Arc<AdminService>,
    /// Share link CRUD
    pub share_service: Arc<ShareService>,
    /// Public share resolution
    pub access_service: Arc<AccessService>,
    /// Content store
    pub content_service: Arc<ContentService>,
}

impl AppState {
    /// Wires record stores and services on top of `store`.
    pub fn new(config: AppConfig, store: Arc<dyn BlobStore>) -> Self {
        let share_index = Arc::new(ShareIndex::new(Arc::clone(&store)));
        let admin_store = Arc::new(AdminConfigStore::new(Arc::clone(&store)));
        let link_service = Arc::new(LinkService::new());

        let admin_service = Arc::new(AdminService::new(admin_store));
        let share_service = Arc::new(ShareService::new(
            Arc::clone(&share_index),
            Arc::clone(&link_service),
        ));
        let access_service = Arc::new(AccessService::new(
            Arc::clone(&share_index),
            Arc::clone(&store),
        ));
        let content_service = Arc::new(ContentService::new(
            Arc::clone(&store),
            Arc::clone(&share_service),
            link_service,
            config.storage.list_limit,
        ));

        Self {
            config: Arc::new(config),
            store,
            admin_service,
            share_service,
            access_service,
            content_service,
        }
    }
}
