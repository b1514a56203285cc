use mech_core::{CapturedMedia, MediaSource, MediaSourceKind, PermissionStatus, ServiceResult};

use std::collections::VecDeque;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Media source for a terminal host: the "library" hands out the files named
/// on the command line one pick at a time, and there is no camera to record with.
#[derive(Debug)]
pub struct FileMediaSource {
    files: Mutex<VecDeque<PathBuf>>,
}

impl FileMediaSource {
    pub fn new(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            files: Mutex::new(files.into_iter().collect()),
        }
    }
}

#[async_trait]
impl MediaSource for FileMediaSource {
    async fn request_permission(&self, source: MediaSourceKind) -> PermissionStatus {
        match source {
            MediaSourceKind::Camera => PermissionStatus::Denied,
            MediaSourceKind::Library => PermissionStatus::Granted,
        }
    }

    /// Once every file has been picked the library reads as cancelled.
    async fn acquire(&self, source: MediaSourceKind) -> ServiceResult<Option<CapturedMedia>> {
        match source {
            MediaSourceKind::Camera => Ok(None),
            MediaSourceKind::Library => {
                Ok(self.files.lock().await.pop_front().map(CapturedMedia::new))
            }
        }
    }
}
