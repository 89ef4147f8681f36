//! S3-compatible object store provider (requires the `s3` feature).

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use notebin_core::error::AppError;
use notebin_core::result::AppResult;
use notebin_core::traits::blob::{BlobMeta, BlobStore};

use super::validate_key;

/// S3-compatible blob store (AWS S3, MinIO, Cloudflare R2).
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    /// Create a new S3 blob store.
    ///
    /// An empty `endpoint` uses the AWS default for `region`. Static
    /// credentials are used when `access_key` is set, otherwise the default
    /// provider chain applies.
    pub async fn new(
        endpoint: &str,
        region: &str,
        bucket: &str,
        access_key: &str,
        secret_key: &str,
    ) -> AppResult<Self> {
        if bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket must be set"));
        }

        info!(endpoint, region, bucket, "Initializing S3 blob store");

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()));
        if !endpoint.is_empty() {
            loader = loader.endpoint_url(endpoint);
        }
        if !access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                access_key, secret_key, None, None, "static",
            ));
        }
        let shared = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(true)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: bucket.to_string(),
        })
    }
}

fn to_chrono(value: &aws_sdk_s3::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                debug!(bucket = %self.bucket, error = %DisplayErrorContext(&err), "S3 health check failed");
                Ok(false)
            }
        }
    }

    async fn get(&self, key: &str) -> AppResult<Option<Bytes>> {
        validate_key(key)?;
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) => {
                if err
                    .as_service_error()
                    .is_some_and(|service_err| service_err.is_no_such_key())
                {
                    return Ok(None);
                }
                return Err(AppError::storage(format!(
                    "Failed to read blob {key}: {}",
                    DisplayErrorContext(&err)
                )));
            }
        };

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| AppError::storage(format!("Failed to read blob body {key}: {e}")))?
            .into_bytes();
        Ok(Some(data))
    }

    async fn put(&self, key: &str, data: Bytes) -> AppResult<()> {
        validate_key(key)?;
        let len = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|err| {
                AppError::storage(format!(
                    "Failed to write blob {key}: {}",
                    DisplayErrorContext(&err)
                ))
            })?;
        debug!(key, bytes = len, "Wrote blob to S3");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                AppError::storage(format!(
                    "Failed to delete blob {key}: {}",
                    DisplayErrorContext(&err)
                ))
            })?;
        Ok(())
    }

    async fn list(&self, limit: usize) -> AppResult<Vec<BlobMeta>> {
        let mut entries = Vec::new();
        let mut continuation: Option<String> = None;

        while entries.len() < limit {
            let page_size = i32::try_from(limit - entries.len()).unwrap_or(1000).min(1000);
            let output = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .max_keys(page_size)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|err| {
                    AppError::storage(format!(
                        "Failed to list blobs: {}",
                        DisplayErrorContext(&err)
                    ))
                })?;

            for object in output.contents() {
                let Some(key) = object.key() else {
                    continue;
                };
                entries.push(BlobMeta {
                    key: key.to_string(),
                    size_bytes: object.size().unwrap_or(0).max(0) as u64,
                    uploaded: object.last_modified().and_then(to_chrono),
                });
            }

            match output.next_continuation_token() {
                Some(token) if output.is_truncated().unwrap_or(false) => {
                    continuation = Some(token.to_string());
                }
                _ => break,
            }
        }

        entries.truncate(limit);
        Ok(entries)
    }
}
