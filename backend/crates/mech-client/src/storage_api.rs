use crate::BackendClient;

use mech_core::{BlobStorage, ServiceError, ServiceResult};

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use reqwest::Method;

/// Blob storage backed by one bucket of the hosted object store.
#[derive(Debug, Clone)]
pub struct StorageApi {
    client: BackendClient,
    bucket: String,
}

impl StorageApi {
    pub fn new(client: BackendClient, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl BlobStorage for StorageApi {
    async fn upload(&self, path: &str, body: Bytes, content_type: &str) -> ServiceResult<()> {
        debug!(
            "Uploading {} bytes to {}/{} ({})",
            body.len(),
            self.bucket,
            path,
            content_type
        );

        let req = self
            .client
            .request(
                Method::POST,
                &format!("/storage/v1/object/{}/{}", self.bucket, path),
            )
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(body);
        self.client.execute(req).await?;

        Ok(())
    }

    fn public_url(&self, path: &str) -> ServiceResult<String> {
        if path.is_empty() {
            return Err(ServiceError::rejected(None, "Object path cannot be empty"));
        }

        Ok(self
            .client
            .url(&format!("/storage/v1/object/public/{}/{}", self.bucket, path)))
    }
}
