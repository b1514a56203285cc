//! Credential-service account types.

use crate::Session;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to an account held by the credential service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
}

/// Metadata attached to the account at sign-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub full_name: String,
    pub username: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub metadata: AccountMetadata,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// What the credential service hands back from a sign-up.
///
/// Either part may be absent: some deployments return no account until the
/// address is confirmed, and most return no session when confirmation is on.
#[derive(Debug, Clone, Default)]
pub struct SignUpOutcome {
    pub account: Option<Account>,
    pub session: Option<Session>,
}
