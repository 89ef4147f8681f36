//! Blob store provider implementations.

pub mod local;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

use std::sync::Arc;

use tracing::info;

use notebin_core::config::storage::StorageConfig;
use notebin_core::error::AppError;
use notebin_core::result::AppResult;
use notebin_core::traits::blob::BlobStore;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;

/// Build the blob store selected by `storage.provider`.
pub async fn open_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    let store: Arc<dyn BlobStore> = match config.provider.as_str() {
        "local" => Arc::new(LocalBlobStore::new(&config.local.root_path).await?),
        "memory" => Arc::new(MemoryBlobStore::new()),
        #[cfg(feature = "s3")]
        "s3" => {
            let s3 = &config.s3;
            Arc::new(
                s3::S3BlobStore::new(
                    &s3.endpoint,
                    &s3.region,
                    &s3.bucket,
                    &s3.access_key,
                    &s3.secret_key,
                )
                .await?,
            )
        }
        #[cfg(not(feature = "s3"))]
        "s3" => {
            return Err(AppError::configuration(
                "S3 storage requires building with the `s3` feature",
            ));
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown storage provider: {other}"
            )));
        }
    };

    info!(provider = store.provider_type(), "Blob store ready");
    Ok(store)
}

/// Reject keys that could escape a provider's namespace.
pub(crate) fn validate_key(key: &str) -> AppResult<()> {
    if key.is_empty() {
        return Err(AppError::validation("Blob key must not be empty"));
    }
    if key.starts_with('/') || key.contains('\\') || key.contains('\0') {
        return Err(AppError::validation(format!("Invalid blob key: {key}")));
    }
    if key.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return Err(AppError::validation(format!("Invalid blob key: {key}")));
    }
    Ok(())
}
