//! Admin setup and session service.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use notebin_auth::credentials::credentials_match;
use notebin_auth::session::SessionToken;
use notebin_core::error::AppError;
use notebin_entity::admin::AdminConfig;
use notebin_storage::records::AdminConfigStore;

/// Handles one-time setup, login, and verification of session tokens.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Admin config record.
    store: Arc<AdminConfigStore>,
    /// Serializes setup within this process.
    setup_lock: Arc<Mutex<()>>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(store: Arc<AdminConfigStore>) -> Self {
        Self {
            store,
            setup_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Whether setup has been completed.
    pub async fn is_initialized(&self) -> Result<bool, AppError> {
        Ok(self.store.load().await?.is_some())
    }

    /// Creates the admin account. Only allowed once.
    pub async fn setup(&self, username: &str, password: &str) -> Result<AdminConfig, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("Username and password are required"));
        }

        let _guard = self.setup_lock.lock().await;
        if self.store.load().await?.is_some() {
            return Err(AppError::conflict("Setup has already been completed"));
        }

        let config = AdminConfig::new(username, password, Utc::now());
        self.store.save(&config).await?;

        info!(username, "Admin account created");
        Ok(config)
    }

    /// Checks the credentials and issues a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let config = self
            .store
            .load()
            .await?
            .ok_or_else(|| AppError::conflict("Setup has not been completed"))?;

        if !credentials_match(&config, username, password) {
            warn!(username, "Admin login failed");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        info!(username, "Admin logged in");
        Ok(SessionToken::issue(&config.username, &config.password, Utc::now()))
    }

    /// Verifies a presented session token. Returns the admin username when
    /// it is valid; `None` when absent, malformed, stale, or before setup.
    pub async fn authenticate(&self, presented: Option<&str>) -> Result<Option<String>, AppError> {
        let Some(presented) = presented else {
            return Ok(None);
        };
        let Some(config) = self.store.load().await? else {
            return Ok(None);
        };
        Ok(SessionToken::verify(presented, &config).then_some(config.username))
    }
}
