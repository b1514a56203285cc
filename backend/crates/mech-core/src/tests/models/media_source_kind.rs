use crate::MediaSourceKind;

use std::str::FromStr;

#[test]
fn test_media_source_kind_round_trips_through_display() {
    for kind in [MediaSourceKind::Camera, MediaSourceKind::Library] {
        assert_eq!(MediaSourceKind::from_str(&kind.to_string()).unwrap(), kind);
    }
}

#[test]
fn test_media_source_kind_default_is_library() {
    assert_eq!(MediaSourceKind::default(), MediaSourceKind::Library);
}

#[test]
fn test_media_source_kind_rejects_unknown() {
    assert!(MediaSourceKind::from_str("scanner").is_err());
}
