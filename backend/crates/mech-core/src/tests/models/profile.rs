use crate::Profile;

use chrono::Utc;
use uuid::Uuid;

fn profile_with_email(email: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        username: "alexj".to_string(),
        email: email.to_string(),
        full_name: "Alex Jones".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn given_mixed_case_email_when_compared_then_matches() {
    let profile = profile_with_email("Alex@X.com");

    assert!(profile.has_email("alex@x.COM"));
}

#[test]
fn given_non_ascii_case_difference_when_compared_then_no_match() {
    let profile = profile_with_email("émile@x.com");

    assert!(profile.has_email("émile@x.com"));
    assert!(!profile.has_email("Émile@x.com"));
}

#[test]
fn given_wildcard_character_when_compared_then_literal() {
    let profile = profile_with_email("axyzb@x.com");

    assert!(!profile.has_email("a*b@x.com"));
}
