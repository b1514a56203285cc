use crate::ServiceResult;

use async_trait::async_trait;
use bytes::Bytes;

/// Object store for uploaded media.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    async fn upload(&self, path: &str, body: Bytes, content_type: &str) -> ServiceResult<()>;

    /// Publicly resolvable address of a stored object.
    fn public_url(&self, path: &str) -> ServiceResult<String>;
}
