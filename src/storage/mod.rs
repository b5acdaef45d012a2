//! S3-compatible object storage collaborator.
//!
//! Thin wrapper around the AWS S3 SDK pointed at a configurable endpoint
//! (Yandex Object Storage in production). Credentials come from the
//! standard AWS environment/profile chain; nothing is configured here.
//! Storage failures are surfaced to the caller with context - never
//! retried at this layer.

use crate::config::StorageConfig;
use anyhow::{Context, Result};
use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Region},
    primitives::ByteStream,
};

/// Handle to one bucket of an S3-compatible store.
pub struct ObjectStore {
    client: Client,
    bucket: String,
}

impl ObjectStore {
    /// Create a client for the configured endpoint and bucket.
    pub async fn connect(config: &StorageConfig) -> Self {
        let base = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        let s3 = aws_sdk_s3::config::Builder::from(&base)
            .endpoint_url(config.endpoint.clone())
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3),
            bucket: config.bucket.clone(),
        }
    }

    /// Fetch an object as UTF-8 text.
    pub async fn fetch(&self, key: &str) -> Result<String> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .with_context(|| format!("failed to fetch s3://{}/{key}", self.bucket))?;

        let bytes = response
            .body
            .collect()
            .await
            .with_context(|| format!("failed to read body of s3://{}/{key}", self.bucket))?
            .into_bytes();

        String::from_utf8(bytes.to_vec())
            .with_context(|| format!("s3://{}/{key} is not valid UTF-8", self.bucket))
    }

    /// Store a generated document under the given key.
    pub async fn put(&self, key: &str, body: String, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body.into_bytes()))
            .send()
            .await
            .with_context(|| format!("failed to store s3://{}/{key}", self.bucket))?;
        Ok(())
    }
}
