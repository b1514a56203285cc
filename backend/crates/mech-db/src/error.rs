use mech_core::{ErrorLocation, ServiceError, UniqueField};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint failed: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_unique_violation()
        {
            return Self::UniqueViolation {
                message: db_err.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { message, .. } => {
                ServiceError::unique_violation(UniqueField::from_message(&message), message)
            }
            DbError::Sqlx { source, .. } => ServiceError::unavailable(source.to_string()),
            DbError::Migration { message, .. } | DbError::Initialization { message, .. } => {
                ServiceError::unavailable(message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
