//! Integration tests for the backend client using wiremock mock server

use mech_client::{AuthApi, BackendClient, RestProfileDirectory, StorageApi};
use mech_core::{
    AccountMetadata, BlobStorage, CredentialService, NewProfile, ProfileDirectory, ServiceError,
    Session, SignUpRequest, UniqueField,
};

use bytes::Bytes;
use serde_json::json;
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

const API_KEY: &str = "test-anon-key";
const USER_ID: &str = "6f1c2d1e-8a42-4d5b-9a0e-0f5d3c2b1a00";

fn directory(server: &MockServer) -> RestProfileDirectory {
    RestProfileDirectory::new(BackendClient::new(&server.uri(), API_KEY), "User")
}

fn auth(server: &MockServer) -> AuthApi {
    AuthApi::new(BackendClient::new(&server.uri(), API_KEY))
}

fn sign_up_request() -> SignUpRequest {
    SignUpRequest {
        email: "alex@x.com".to_string(),
        password: "pw123456".to_string(),
        metadata: AccountMetadata {
            full_name: "Alex Jones".to_string(),
            username: "alexj".to_string(),
        },
    }
}

fn token_json() -> serde_json::Value {
    json!({
        "access_token": "access-tok",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-tok",
        "user": { "id": USER_ID, "email": "alex@x.com" }
    })
}

#[tokio::test]
async fn test_find_by_username_sends_exact_filter_and_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .and(query_param("username", "eq.alexj"))
        .and(query_param("select", "*"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", "Bearer test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "username": "alexj",
                "email": "alex@x.com",
                "full_name": "Alex Jones"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let found = directory(&server).find_by_username("alexj").await.unwrap();

    let profile = found.unwrap();
    assert_eq!(profile.username, "alexj");
    assert_eq!(profile.full_name, "Alex Jones");
    assert_eq!(profile.id, Uuid::nil());
}

#[tokio::test]
async fn test_find_by_username_no_rows_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let found = directory(&server).find_by_username("nobody").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_email_uses_case_insensitive_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .and(query_param("email", "ilike.Alex@X.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "username": "alexj", "email": "alex@x.com" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let found = directory(&server).find_by_email("Alex@X.com").await.unwrap();

    assert!(found.unwrap().has_email("ALEX@x.com"));
}

#[tokio::test]
async fn test_find_with_multiple_rows_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "username": "a", "email": "a@x.com" },
            { "username": "b", "email": "a@x.com" }
        ])))
        .mount(&server)
        .await;

    let result = directory(&server).find_by_email("a@x.com").await;

    assert!(matches!(result, Err(ServiceError::Rejected { .. })));
}

#[tokio::test]
async fn test_find_by_email_ignores_rows_matched_only_by_wildcard() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .and(query_param("email", "ilike.a*b@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "username": "axyzb", "email": "axyzb@x.com" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let found = directory(&server).find_by_email("a*b@x.com").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_email_keeps_exact_row_among_wildcard_matches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "username": "axyzb", "email": "axyzb@x.com" },
            { "username": "astarb", "email": "A*B@x.com" }
        ])))
        .mount(&server)
        .await;

    let found = directory(&server).find_by_email("a*b@x.com").await.unwrap();

    assert_eq!(found.unwrap().username, "astarb");
}

#[tokio::test]
async fn test_lookup_server_error_is_rejected_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/User"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "upstream timeout"
        })))
        .mount(&server)
        .await;

    let err = directory(&server)
        .find_by_username("alexj")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "upstream timeout");
}

#[tokio::test]
async fn test_insert_posts_row_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/User"))
        .and(header("prefer", "return=minimal"))
        .and(body_string_contains("\"username\":\"alexj\""))
        .and(body_string_contains("\"full_name\":\"Alex Jones\""))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let row = NewProfile::new(
        "alexj".to_string(),
        "alex@x.com".to_string(),
        "Alex Jones".to_string(),
    );

    directory(&server).insert(&row).await.unwrap();
}

#[tokio::test]
async fn test_insert_conflict_maps_to_unique_violation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/User"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "details": "Key (email)=(alex@x.com) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"User_email_key\""
        })))
        .mount(&server)
        .await;

    let row = NewProfile::new(
        "alexj".to_string(),
        "alex@x.com".to_string(),
        "Alex Jones".to_string(),
    );

    let err = directory(&server).insert(&row).await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::UniqueViolation {
            field: UniqueField::Email,
            ..
        }
    ));
}

#[tokio::test]
async fn test_sign_up_with_immediate_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_string_contains("\"email\":\"alex@x.com\""))
        .and(body_string_contains("\"username\":\"alexj\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json()))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = auth(&server).sign_up(&sign_up_request()).await.unwrap();

    assert_eq!(
        outcome.account.unwrap().id,
        Uuid::parse_str(USER_ID).unwrap()
    );
    let session = outcome.session.unwrap();
    assert_eq!(session.access_token, "access-tok");
    assert!(session.expires_at.is_some());
}

#[tokio::test]
async fn test_sign_up_pending_confirmation_has_no_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": USER_ID,
            "email": "alex@x.com",
            "confirmation_sent_at": "2026-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let outcome = auth(&server).sign_up(&sign_up_request()).await.unwrap();

    assert!(outcome.account.is_some());
    assert!(outcome.session.is_none());
}

#[tokio::test]
async fn test_sign_up_rejected_keeps_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "user_already_exists",
            "msg": "User already registered"
        })))
        .mount(&server)
        .await;

    let err = auth(&server).sign_up(&sign_up_request()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Rejected { .. }));
    assert_eq!(err.message(), "User already registered");
}

#[tokio::test]
async fn test_sign_in_uses_password_grant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(body_string_contains("\"password\":\"pw123456\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_json()))
        .expect(1)
        .mount(&server)
        .await;

    let session = auth(&server)
        .sign_in_with_password("alex@x.com", "pw123456")
        .await
        .unwrap();

    assert_eq!(session.email, "alex@x.com");
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-tok"));
}

#[tokio::test]
async fn test_sign_in_bad_credentials_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let result = auth(&server)
        .sign_in_with_password("alex@x.com", "wrong")
        .await;

    assert!(matches!(result, Err(ServiceError::Rejected { .. })));
}

#[tokio::test]
async fn test_sign_out_sends_session_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer access-tok"))
        .and(header("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session {
        access_token: "access-tok".to_string(),
        refresh_token: None,
        user_id: Uuid::parse_str(USER_ID).unwrap(),
        email: "alex@x.com".to_string(),
        expires_at: None,
    };

    auth(&server).sign_out(&session).await.unwrap();
}

#[tokio::test]
async fn test_upload_posts_bytes_with_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/storage/v1/object/mechanics-uploads-bucket/swing-1700000000000.mp4",
        ))
        .and(header("content-type", "video/mp4"))
        .and(header("x-upsert", "false"))
        .and(body_string_contains("fake-video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Key": "mechanics-uploads-bucket/swing-1700000000000.mp4"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let storage = StorageApi::new(
        BackendClient::new(&server.uri(), API_KEY),
        "mechanics-uploads-bucket",
    );

    storage
        .upload(
            "swing-1700000000000.mp4",
            Bytes::from_static(b"fake-video"),
            "video/mp4",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_failure_surfaces_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/storage/v1/object/mechanics-uploads-bucket/pitch-1.mp4"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({
            "statusCode": "413",
            "error": "Payload too large",
            "message": "The object exceeded the maximum allowed size"
        })))
        .mount(&server)
        .await;

    let storage = StorageApi::new(
        BackendClient::new(&server.uri(), API_KEY),
        "mechanics-uploads-bucket",
    );

    let err = storage
        .upload("pitch-1.mp4", Bytes::from_static(b"x"), "video/mp4")
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "The object exceeded the maximum allowed size"
    );
}
