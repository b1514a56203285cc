#![allow(dead_code)]

use mech_core::{NewProfile, Profile};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Creates a test Profile with whole-second timestamps (the column stores seconds)
pub fn create_test_profile(username: &str, email: &str) -> Profile {
    let now = Utc::now().timestamp();
    Profile {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: email.to_string(),
        full_name: "Alex Johnson".to_string(),
        created_at: DateTime::from_timestamp(now, 0).unwrap(),
    }
}

pub fn create_new_profile(username: &str, email: &str) -> NewProfile {
    NewProfile::new(
        username.to_string(),
        email.to_string(),
        "Alex Johnson".to_string(),
    )
}
