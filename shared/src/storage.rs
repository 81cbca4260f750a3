use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;

use crate::error::StorageError;

/// Blob-store seam consumed by the handler. Implemented for S3 below and by
/// in-memory stores in tests.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError>;
}

/// Fetches objects from S3.
pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let result = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let service_err = err.into_service_error();
                tracing::debug!("Failed to get object from S3: {}", service_err);
                if service_err.is_no_such_key() {
                    StorageError::NotFound {
                        key: key.to_string(),
                    }
                } else {
                    StorageError::Internal(service_err.to_string())
                }
            })?;

        let data = result
            .body
            .collect()
            .await
            .map_err(|err| StorageError::Internal(format!("Failed to read S3 body: {err}")))?
            .into_bytes();

        Ok(data)
    }
}
