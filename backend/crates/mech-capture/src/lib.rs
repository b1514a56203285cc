//! Capture-and-upload flow: pick a technique, get a video off the device,
//! push it to blob storage and keep a local history of what was sent.

pub mod error;
pub mod history;
pub mod scorer;
pub mod upload_flow;
pub mod upload_settings;

pub use error::{CaptureError, Result};
pub use history::{UploadHistory, format_time_ago};
pub use scorer::{PlaceholderScorer, ScoreSource};
pub use upload_flow::{UploadFlow, object_path};
pub use upload_settings::UploadSettings;

#[cfg(test)]
mod tests;
