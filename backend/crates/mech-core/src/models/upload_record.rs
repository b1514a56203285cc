use crate::UploadKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-local history entry created right after a successful upload.
/// Never persisted remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub kind: UploadKind,
    /// Placeholder score out of 10, one decimal
    pub score: f64,
    pub uploaded_at: DateTime<Utc>,
    pub video_url: String,
}
