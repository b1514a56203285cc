use mech_core::{ServiceError, UniqueField};

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Postgres SQLSTATE for unique_violation, passed through by the REST layer
pub(crate) const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Errors that can occur during backend calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code:?}) {location}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an invalid-URL error with location
    #[track_caller]
    pub fn invalid_url<E: std::fmt::Display>(err: E) -> Self {
        ClientError::InvalidUrl {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for ServiceError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api {
                code,
                message,
                details,
                ..
            } if code.as_deref() == Some(UNIQUE_VIOLATION_CODE) => {
                let field = details
                    .as_deref()
                    .and_then(UniqueField::from_details)
                    .unwrap_or_else(|| UniqueField::from_message(&message));
                ServiceError::unique_violation(field, message)
            }
            ClientError::Api { code, message, .. } => ServiceError::rejected(code, message),
            ClientError::Http { message, .. }
            | ClientError::Json { message, .. }
            | ClientError::InvalidUrl { message, .. } => {
                ServiceError::unavailable(message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
