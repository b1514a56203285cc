use crate::{CapturedMedia, MediaSourceKind, PermissionStatus, ServiceResult};

use async_trait::async_trait;

/// Device camera and media library.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn request_permission(&self, source: MediaSourceKind) -> PermissionStatus;

    /// Returns `None` when the user cancels.
    async fn acquire(&self, source: MediaSourceKind) -> ServiceResult<Option<CapturedMedia>>;
}
