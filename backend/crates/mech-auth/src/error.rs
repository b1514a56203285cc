use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Username already taken {location}")]
    DuplicateIdentifier { location: ErrorLocation },

    #[error("Email already in use {location}")]
    DuplicateEmail { location: ErrorLocation },

    #[error("Directory lookup failed: {message} ({cause}) {location}")]
    LookupError {
        message: &'static str,
        cause: String,
        location: ErrorLocation,
    },

    #[error("Account provisioning failed: {message} {location}")]
    ProvisioningError {
        message: String,
        location: ErrorLocation,
    },

    #[error("Directory write failed: {message} (orphaned account: {orphaned_account:?}) {location}")]
    DirectoryWriteError {
        message: String,
        orphaned_account: Option<Uuid>,
        location: ErrorLocation,
    },

    #[error("User not found {location}")]
    UserNotFound { location: ErrorLocation },

    #[error("Invalid credentials: {cause} {location}")]
    InvalidCredentials {
        cause: String,
        location: ErrorLocation,
    },

    #[error("Invalid session: {message} {location}")]
    InvalidSession {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot {operation} while {state} {location}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
        location: ErrorLocation,
    },

    #[error("Another operation is in progress {location}")]
    Busy { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// The single line shown to the user. Never carries a source location.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField { field, .. } => format!("Please enter your {}", field),
            Self::DuplicateIdentifier { .. } => "Username already taken".to_string(),
            Self::DuplicateEmail { .. } => "Email already in use".to_string(),
            Self::LookupError { message, .. } => message.to_string(),
            Self::ProvisioningError { message, .. } => message.clone(),
            Self::DirectoryWriteError { message, .. } => message.clone(),
            Self::UserNotFound { .. } => "User not found".to_string(),
            Self::InvalidCredentials { .. } => "Incorrect password".to_string(),
            Self::InvalidSession { .. } | Self::TokenExpired { .. } => {
                "Session could not be verified. Please sign in again.".to_string()
            }
            Self::JwtDecode { .. } | Self::InvalidClaim { .. } => {
                "Session could not be verified. Please sign in again.".to_string()
            }
            Self::InvalidTransition { .. } => "That action is not available right now".to_string(),
            Self::Busy { .. } => "Please wait for the current request to finish".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::DuplicateIdentifier { .. } => "DUPLICATE_IDENTIFIER",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::LookupError { .. } => "LOOKUP_ERROR",
            Self::ProvisioningError { .. } => "PROVISIONING_ERROR",
            Self::DirectoryWriteError { .. } => "DIRECTORY_WRITE_ERROR",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::InvalidSession { .. } => "INVALID_SESSION",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Busy { .. } => "BUSY",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
