use crate::{CoreError, UploadKind};

use std::str::FromStr;

#[test]
fn test_upload_kind_as_str() {
    assert_eq!(UploadKind::Swing.as_str(), "swing");
    assert_eq!(UploadKind::Pitch.as_str(), "pitch");
}

#[test]
fn test_upload_kind_from_str() {
    assert_eq!(UploadKind::from_str("swing").unwrap(), UploadKind::Swing);
    assert_eq!(UploadKind::from_str("pitch").unwrap(), UploadKind::Pitch);
}

#[test]
fn test_upload_kind_from_str_is_case_sensitive() {
    let result = UploadKind::from_str("Swing");

    assert!(matches!(result, Err(CoreError::InvalidUploadKind { value, .. }) if value == "Swing"));
}

#[test]
fn test_upload_kind_serializes_lowercase() {
    let json = serde_json::to_string(&UploadKind::Pitch).unwrap();
    assert_eq!(json, "\"pitch\"");
}
