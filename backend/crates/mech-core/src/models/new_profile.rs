use crate::Profile;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row written to the directory once the credential-service account exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl NewProfile {
    pub fn new(username: String, email: String, full_name: String) -> Self {
        Self {
            username,
            email,
            full_name,
        }
    }

    /// Materialize the row with a fresh id, for directories that assign ids client-side
    pub fn into_profile(self) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            created_at: Utc::now(),
        }
    }
}
