//! Errors reported by the external collaborators (directory, credential
//! service, blob storage, device media).

use crate::ErrorLocation;

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Which uniqueness constraint a directory write tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
    Unknown,
}

impl UniqueField {
    /// Best-effort detection from a constraint message, e.g.
    /// `duplicate key value violates unique constraint "User_email_key"` or
    /// `UNIQUE constraint failed: profiles.username`.
    ///
    /// A quoted constraint name wins over the rest of the text.
    pub fn from_message(message: &str) -> Self {
        let constraint = message
            .split_once('"')
            .and_then(|(_, rest)| rest.split_once('"'))
            .map(|(name, _)| name);
        Self::from_identifier(constraint.unwrap_or(message))
    }

    /// Detection from a Postgres detail line, `Key (email)=(a@x.com) already exists.`
    ///
    /// Only the key column list is inspected; the duplicated value never is.
    pub fn from_details(details: &str) -> Option<Self> {
        let (_, rest) = details.split_once("Key (")?;
        let (columns, _) = rest.split_once(")=(")?;
        Some(Self::from_identifier(columns))
    }

    fn from_identifier(identifier: &str) -> Self {
        let lower = identifier.to_lowercase();
        if lower.contains("username") {
            Self::Username
        } else if lower.contains("email") {
            Self::Email
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => write!(f, "username"),
            Self::Email => write!(f, "email"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service could not be reached or answered with something unreadable.
    #[error("Service unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The service answered with a structured error.
    #[error("Service rejected request: {message} {location}")]
    Rejected {
        code: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {field}: {message} {location}")]
    UniqueViolation {
        field: UniqueField,
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(code: Option<String>, message: S) -> Self {
        Self::Rejected {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unique_violation<S: Into<String>>(field: UniqueField, message: S) -> Self {
        Self::UniqueViolation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message as the service phrased it, without location decoration.
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable { message, .. }
            | Self::Rejected { message, .. }
            | Self::UniqueViolation { message, .. } => message,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
