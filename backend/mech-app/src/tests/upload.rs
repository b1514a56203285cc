use crate::error::AppError;
use crate::handlers::upload;

use mech_capture::UploadSettings;
use mech_core::{BlobStorage, ServiceResult};

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingStorage {
    paths: Mutex<Vec<String>>,
}

#[async_trait]
impl BlobStorage for RecordingStorage {
    async fn upload(&self, path: &str, _body: Bytes, _content_type: &str) -> ServiceResult<()> {
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }

    fn public_url(&self, path: &str) -> ServiceResult<String> {
        Ok(format!("https://cdn.test/{}", path))
    }
}

fn video_files(temp: &TempDir, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = temp.path().join(name);
            std::fs::write(&path, b"fake-video-bytes").unwrap();
            path
        })
        .collect()
}

#[tokio::test]
async fn given_two_files_when_uploading_then_history_lists_both_most_recent_first() {
    let temp = TempDir::new().unwrap();
    let files = video_files(&temp, &["first.mp4", "second.mp4"]);
    let storage = Arc::new(RecordingStorage::default());

    let value = upload(
        storage.clone(),
        UploadSettings::default(),
        "swing",
        files,
        "library",
    )
    .await
    .unwrap();

    assert_eq!(value["status"], "uploaded");
    assert_eq!(value["count"], 2);
    let uploads = value["uploads"].as_array().unwrap();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0]["uploaded"], "Just now");
    assert_eq!(uploads[0]["kind"], "swing");

    let paths = storage.paths.lock().unwrap().clone();
    assert_eq!(paths.len(), 2);
    assert_eq!(
        uploads[0]["video_url"],
        format!("https://cdn.test/{}", paths[1])
    );
    assert_eq!(
        uploads[1]["video_url"],
        format!("https://cdn.test/{}", paths[0])
    );
}

#[tokio::test]
async fn given_camera_source_when_uploading_then_permission_error_and_nothing_sent() {
    let temp = TempDir::new().unwrap();
    let files = video_files(&temp, &["clip.mp4"]);
    let storage = Arc::new(RecordingStorage::default());

    let result = upload(
        storage.clone(),
        UploadSettings::default(),
        "pitch",
        files,
        "camera",
    )
    .await;

    assert!(matches!(result, Err(AppError::Capture(_))));
    assert!(storage.paths.lock().unwrap().is_empty());
}
