use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::info;

use crate::errors::SummaryError;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads the whole object and decodes it as UTF-8.
    async fn get_object_text(&self, bucket: &str, key: &str) -> Result<String, SummaryError>;
}

pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    #[must_use]
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object_text(&self, bucket: &str, key: &str) -> Result<String, SummaryError> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                SummaryError::StorageError(format!("s3 get_object: {}", DisplayErrorContext(&e)))
            })?;

        let bytes = resp
            .body
            .collect()
            .await
            .map_err(|e| SummaryError::StorageError(format!("s3 body read: {e}")))?
            .into_bytes();

        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| SummaryError::StorageError(format!("document is not UTF-8: {e}")))?;

        info!(bucket, key, chars = text.chars().count(), "Fetched document content");
        Ok(text)
    }
}
