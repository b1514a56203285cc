use crate::{CaptureError, Result as CaptureErrorResult, ScoreSource, UploadHistory, UploadSettings};

use mech_core::{
    BlobStorage, CapturedMedia, ErrorLocation, InFlight, MediaSource, MediaSourceKind, UploadKind,
    UploadRecord,
};

use std::panic::Location;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::sync::Mutex;

pub struct UploadFlow {
    storage: Arc<dyn BlobStorage>,
    media: Arc<dyn MediaSource>,
    scorer: Arc<dyn ScoreSource>,
    settings: UploadSettings,
    selected: Mutex<Option<UploadKind>>,
    history: UploadHistory,
    in_flight: InFlight,
}

impl UploadFlow {
    pub fn new(
        storage: Arc<dyn BlobStorage>,
        media: Arc<dyn MediaSource>,
        scorer: Arc<dyn ScoreSource>,
        settings: UploadSettings,
    ) -> Self {
        Self {
            storage,
            media,
            scorer,
            settings,
            selected: Mutex::new(None),
            history: UploadHistory::new(),
            in_flight: InFlight::new(),
        }
    }

    pub async fn select_kind(&self, kind: UploadKind) {
        *self.selected.lock().await = Some(kind);
    }

    pub async fn selected_kind(&self) -> Option<UploadKind> {
        *self.selected.lock().await
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Most recent first
    pub async fn history(&self) -> Vec<UploadRecord> {
        self.history.snapshot().await
    }

    /// Ask for access, get a video from `source` and upload it under the selected kind.
    ///
    /// `Ok(None)` means the user backed out of the picker and nothing was sent.
    pub async fn capture(&self, source: MediaSourceKind) -> CaptureErrorResult<Option<UploadRecord>> {
        let Some(_guard) = self.in_flight.try_begin() else {
            return Err(CaptureError::Busy {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let kind = self
            .selected_kind()
            .await
            .ok_or_else(|| CaptureError::NoKindSelected {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !self.media.request_permission(source).await.is_granted() {
            warn!("{} permission denied", source);
            return Err(CaptureError::PermissionDenied {
                media_source: source,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let media = match self.media.acquire(source).await {
            Ok(Some(media)) => media,
            Ok(None) => {
                debug!("{} acquisition cancelled", source);
                return Ok(None);
            }
            Err(e) => {
                return Err(CaptureError::UploadError {
                    message: e.message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        self.upload(kind, &media).await.map(Some)
    }

    async fn upload(&self, kind: UploadKind, media: &CapturedMedia) -> CaptureErrorResult<UploadRecord> {
        let body = tokio::fs::read(&media.path)
            .await
            .map(Bytes::from)
            .map_err(|e| CaptureError::UploadError {
                message: format!("Could not read {}: {}", media.path.display(), e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let now = Utc::now();
        let path = object_path(kind, now, &self.settings.file_extension);
        let size = body.len();

        self.storage
            .upload(&path, body, &self.settings.content_type)
            .await
            .map_err(|e| CaptureError::UploadError {
                message: format!("Upload failed: {}", e.message()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let video_url = match self.storage.public_url(&path) {
            Ok(url) if !url.is_empty() => url,
            _ => {
                return Err(CaptureError::UploadError {
                    message: "Failed to get public URL".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        info!("Uploaded {} ({} bytes) to {}", path, size, video_url);

        let record = UploadRecord {
            kind,
            score: self.scorer.score(),
            uploaded_at: now,
            video_url,
        };
        self.history.push(record.clone()).await;

        Ok(record)
    }
}

/// `{kind}-{unix millis}.{extension}`
pub fn object_path(kind: UploadKind, at: DateTime<Utc>, extension: &str) -> String {
    format!("{}-{}.{}", kind, at.timestamp_millis(), extension)
}
