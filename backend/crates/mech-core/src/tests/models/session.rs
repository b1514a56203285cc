use crate::Session;

use chrono::{Duration, Utc};
use uuid::Uuid;

fn session_expiring_in(seconds: i64) -> Session {
    Session {
        access_token: "secret-access-token".to_string(),
        refresh_token: Some("secret-refresh-token".to_string()),
        user_id: Uuid::new_v4(),
        email: "alex@x.com".to_string(),
        expires_at: Some(Utc::now() + Duration::seconds(seconds)),
    }
}

#[test]
fn given_session_when_debug_formatted_then_tokens_are_not_printed() {
    let session = session_expiring_in(3600);

    let printed = format!("{:?}", session);

    assert!(printed.contains("alex@x.com"));
    assert!(!printed.contains("secret-access-token"));
    assert!(!printed.contains("secret-refresh-token"));
}

#[test]
fn given_past_expiry_when_checked_then_expired() {
    let session = session_expiring_in(-10);
    assert!(session.is_expired_at(Utc::now()));
}

#[test]
fn given_no_expiry_when_checked_then_never_expired() {
    let mut session = session_expiring_in(0);
    session.expires_at = None;
    assert!(!session.is_expired_at(Utc::now() + Duration::days(365)));
}
