//! Blob storage for uploaded resume documents.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("document upload failed: {0}")]
pub struct StorageError(pub String);

/// Write side of the document store.
///
/// Implementations must be idempotent on key: re-uploading the same key
/// overwrites the previous object and returns the same URL.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Uploads the document and returns a stable retrievable URL.
    async fn store(
        &self,
        key: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError>;
}

/// `DocumentStore` backed by S3 / MinIO.
pub struct S3DocumentStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3DocumentStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, endpoint: String) -> Self {
        Self {
            client,
            bucket,
            endpoint,
        }
    }
}

#[async_trait]
impl DocumentStore for S3DocumentStore {
    async fn store(
        &self,
        key: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(content.to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError(e.to_string()))?;

        let url = format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            key
        );
        info!("uploaded document to {url}");
        Ok(url)
    }
}
