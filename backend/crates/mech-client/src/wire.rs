//! JSON shapes exchanged with the hosted backend.

use crate::ClientError;

use mech_core::{Account, ErrorLocation, Profile, Session};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UserBody {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserBody {
    pub fn into_account(self) -> Account {
        Account {
            id: self.id,
            email: self.email.unwrap_or_default(),
        }
    }
}

/// Token grant as returned by sign-in, and by sign-up when no confirmation is required
#[derive(Debug, Deserialize)]
pub(crate) struct TokenBody {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserBody,
}

impl TokenBody {
    pub fn into_session(self) -> Session {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => DateTime::from_timestamp(at, 0),
            (None, Some(secs)) => Some(Utc::now() + Duration::seconds(secs)),
            (None, None) => None,
        };

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user_id: self.user.id,
            email: self.user.email.unwrap_or_default(),
            expires_at,
        }
    }
}

/// Directory row as served by the REST layer
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProfileBody {
    /// Tables that do not expose `id`/`created_at` yield a nil id and the epoch.
    pub fn into_profile(self) -> Profile {
        Profile {
            id: self.id.unwrap_or_else(Uuid::nil),
            username: self.username,
            email: self.email,
            full_name: self.full_name.unwrap_or_default(),
            created_at: self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

/// Pull `(code, message, details)` out of any of the backend's error body dialects.
#[track_caller]
pub(crate) fn parse_error_body(status: u16, body: &str) -> ClientError {
    let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let message = ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(String::from)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                body.trim().to_string()
            }
        });

    let code = ["code", "error_code"].iter().find_map(|key| match value.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    });

    let details = value
        .get("details")
        .and_then(Value::as_str)
        .map(String::from);

    ClientError::Api {
        status,
        code,
        message,
        details,
        location: ErrorLocation::from(Location::caller()),
    }
}
