use crate::ScoreSource;

use mech_core::{
    BlobStorage, CapturedMedia, MediaSource, MediaSourceKind, PermissionStatus, ServiceError,
    ServiceResult,
};

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Notify;

#[derive(Default)]
pub struct FakeStorage {
    /// (path, size, content type)
    pub uploads: Mutex<Vec<(String, usize, String)>>,
    pub fail_upload: bool,
    pub blank_public_url: bool,
    pub gate: Option<std::sync::Arc<Notify>>,
}

impl FakeStorage {
    pub fn uploaded_paths(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _, _)| path.clone())
            .collect()
    }
}

#[async_trait]
impl BlobStorage for FakeStorage {
    async fn upload(&self, path: &str, body: Bytes, content_type: &str) -> ServiceResult<()> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_upload {
            return Err(ServiceError::rejected(None, "Bucket not found"));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), body.len(), content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, path: &str) -> ServiceResult<String> {
        if self.blank_public_url {
            return Ok(String::new());
        }
        Ok(format!("https://cdn.test/{}", path))
    }
}

pub struct FakeMedia {
    pub permission: PermissionStatus,
    /// `None` simulates the user cancelling the picker
    pub file: Option<PathBuf>,
    pub permission_requests: AtomicUsize,
}

impl FakeMedia {
    pub fn granting(file: Option<PathBuf>) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            file,
            permission_requests: AtomicUsize::new(0),
        }
    }

    pub fn denying() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            file: None,
            permission_requests: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.permission_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaSource for FakeMedia {
    async fn request_permission(&self, _source: MediaSourceKind) -> PermissionStatus {
        self.permission_requests.fetch_add(1, Ordering::SeqCst);
        self.permission
    }

    async fn acquire(&self, _source: MediaSourceKind) -> ServiceResult<Option<CapturedMedia>> {
        Ok(self.file.clone().map(CapturedMedia::new))
    }
}

pub struct FixedScorer(pub f64);

impl ScoreSource for FixedScorer {
    fn score(&self) -> f64 {
        self.0
    }
}
