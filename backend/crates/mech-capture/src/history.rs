use mech_core::UploadRecord;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// Uploads made during this run, most recent first. Never persisted.
#[derive(Debug, Default)]
pub struct UploadHistory {
    records: Mutex<Vec<UploadRecord>>,
}

impl UploadHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, record: UploadRecord) {
        self.records.lock().await.insert(0, record);
    }

    pub async fn snapshot(&self) -> Vec<UploadRecord> {
        self.records.lock().await.clone()
    }
}

/// Coarse relative label for a past instant. Future instants read as "Just now".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hours ago", hours);
    }

    format!("{} days ago", hours / 24)
}
