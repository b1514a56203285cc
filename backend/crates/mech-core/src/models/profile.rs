//! Profile entity - one directory row per registered identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directory row as returned by a lookup.
/// The secret never lives here; it is held by the credential service only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// Unique human-readable identifier chosen at registration
    pub username: String,
    /// Stored as entered; uniqueness is case-insensitive
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Case-insensitive email comparison, matching how the directory enforces uniqueness.
    ///
    /// Folding is ASCII-only, the same as SQLite `NOCASE`, so `É` and `é` differ.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}
