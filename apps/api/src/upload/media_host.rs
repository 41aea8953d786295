use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;
use uuid::Uuid;

use crate::upload::DataUri;

/// Stores an uploaded file and returns the URL it is served from.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, file: &DataUri) -> Result<String>;
}

/// Hosts uploads in an S3 (or MinIO) bucket fronted by a public base URL.
pub struct S3MediaHost {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl S3MediaHost {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, public_url: String) -> Self {
        Self {
            client,
            bucket,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_key(file: &DataUri) -> String {
        format!("uploads/{}.{}", Uuid::new_v4(), file.extension())
    }
}

#[async_trait]
impl MediaHost for S3MediaHost {
    async fn upload(&self, file: &DataUri) -> Result<String> {
        let body = file.decode().context("data URI payload is not valid base64")?;
        let key = Self::object_key(file);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_type(file.mime())
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Uploaded {} to s3://{}/{}", file.mime(), self.bucket, key);

        Ok(format!("{}/{}", self.public_url, key))
    }
}
