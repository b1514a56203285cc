use crate::rest_directory::escape_like;
use crate::{BackendClient, StorageApi};

use mech_core::BlobStorage;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = BackendClient::new("https://abc.supabase.co/", "anon");
    assert_eq!(client.base_url, "https://abc.supabase.co");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = BackendClient::new("https://abc.supabase.co", "anon");
    assert_eq!(client.base_url, "https://abc.supabase.co");
}

#[test]
fn test_debug_output_hides_api_key() {
    let client = BackendClient::new("https://abc.supabase.co", "very-secret-key");
    assert!(!format!("{:?}", client).contains("very-secret-key"));
}

#[test]
fn test_escape_like_plain_email_unchanged() {
    assert_eq!(escape_like("alex@x.com"), "alex@x.com");
}

#[test]
fn test_escape_like_escapes_metacharacters() {
    assert_eq!(escape_like("a_b%c\\d"), "a\\_b\\%c\\\\d");
}

#[test]
fn test_public_url_points_into_public_bucket() {
    let storage = StorageApi::new(
        BackendClient::new("https://abc.supabase.co/", "anon"),
        "mechanics-uploads-bucket",
    );

    let url = storage.public_url("swing-1700000000000.mp4").unwrap();

    assert_eq!(
        url,
        "https://abc.supabase.co/storage/v1/object/public/mechanics-uploads-bucket/swing-1700000000000.mp4"
    );
}

#[test]
fn test_public_url_rejects_empty_path() {
    let storage = StorageApi::new(BackendClient::new("https://abc.supabase.co", "anon"), "b");
    assert!(storage.public_url("").is_err());
}
