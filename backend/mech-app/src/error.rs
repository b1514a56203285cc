use mech_auth::AuthError;
use mech_capture::CaptureError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] mech_config::ConfigError),

    #[error("Directory error: {0}")]
    Directory(#[from] mech_db::DbError),

    #[error("Invalid argument: {0}")]
    Argument(#[from] mech_core::CoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl AppError {
    /// What goes to stderr. Flow errors show their user-facing line only.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(e) => e.user_message(),
            Self::Capture(e) => e.user_message(),
            Self::NotFound { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
