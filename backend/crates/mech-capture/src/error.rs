use mech_core::MediaSourceKind;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No upload kind selected {location}")]
    NoKindSelected { location: ErrorLocation },

    #[error("Permission denied for {media_source} {location}")]
    PermissionDenied {
        media_source: MediaSourceKind,
        location: ErrorLocation,
    },

    #[error("Upload error: {message} {location}")]
    UploadError {
        message: String,
        location: ErrorLocation,
    },

    #[error("An upload is already in progress {location}")]
    Busy { location: ErrorLocation },
}

impl CaptureError {
    pub fn user_message(&self) -> String {
        match self {
            Self::NoKindSelected { .. } => "Please select a type first.".to_string(),
            Self::PermissionDenied { media_source, .. } => match media_source {
                MediaSourceKind::Camera => "Camera permission required".to_string(),
                MediaSourceKind::Library => "Library permission required".to_string(),
            },
            Self::UploadError { message, .. } => message.clone(),
            Self::Busy { .. } => "Please wait for the current upload to finish".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoKindSelected { .. } => "NO_KIND_SELECTED",
            Self::PermissionDenied { .. } => "PERMISSION_DENIED",
            Self::UploadError { .. } => "UPLOAD_ERROR",
            Self::Busy { .. } => "BUSY",
        }
    }
}

pub type Result<T> = std::result::Result<T, CaptureError>;
