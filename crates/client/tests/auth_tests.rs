//! Sign-in and sign-out tests.
//!
//! # Invariants
//! - The sign-in body always carries `contentUrl: ""`, whatever the site id
//! - A response without `credentials.token` is an authentication failure
//! - Sign-out drops the token only when the server call succeeds

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};

#[tokio::test]
async fn test_sign_in_stores_token_and_luids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .and(header("accept", "application/json"))
        .and(header("cache-control", "no-cache"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "credentials": { "name": "admin", "password": "pw", "site": { "contentUrl": "" } }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("auth/signin_success.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    client.sign_in().await.unwrap();

    assert!(client.is_signed_in());
    assert_eq!(client.auth_token(), Some("fixture-token-12345"));
    assert_eq!(
        client.signed_in_site_luid(),
        Some("9a8b7c6d-5e4f-3a2b-1c0d-9e8f7a6b5c4d")
    );
    assert_eq!(
        client.signed_in_user_id(),
        Some("1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d")
    );
}

#[tokio::test]
async fn test_first_sign_in_sends_no_auth_header() {
    let mock_server = MockServer::start().await;
    let _client = signed_in_client(&mock_server, "mysite", "abc123").await;

    let requests = requests_to(&mock_server, "/auth/signin").await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get(AUTH_HEADER).is_none());
}

#[tokio::test]
async fn test_second_sign_in_sends_previous_token_and_replaces_it() {
    let mock_server = MockServer::start().await;
    let mut client = signed_in_client(&mock_server, "mysite", "first-token").await;

    mock_server.reset().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .and(header(AUTH_HEADER, "first-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": { "token": "second-token" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.sign_in().await.unwrap();
    assert_eq!(client.auth_token(), Some("second-token"));
}

#[tokio::test]
async fn test_sign_in_without_token_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    let err = client.sign_in().await.unwrap_err();

    match err {
        ClientError::AuthFailed(msg) => assert_eq!(msg, "Token is missing"),
        other => panic!("Expected AuthFailed, got {:?}", other),
    }
    assert!(client.auth_token().is_none());
}

#[tokio::test]
async fn test_sign_in_empty_body_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    let err = client.sign_in().await.unwrap_err();

    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_sign_in_non_json_body_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    let err = client.sign_in().await.unwrap_err();

    assert!(err.is_auth_error());
    match err {
        ClientError::AuthFailed(msg) => assert_eq!(msg, "Token is missing"),
        other => panic!("Expected AuthFailed, got {:?}", other),
    }
    assert!(client.auth_token().is_none());
}

#[tokio::test]
async fn test_sign_in_wrong_json_shape_is_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    let err = client.sign_in().await.unwrap_err();

    assert!(matches!(err, ClientError::AuthFailed(_)));
}

#[tokio::test]
async fn test_failed_sign_in_keeps_previous_token() {
    let mock_server = MockServer::start().await;
    let mut client = signed_in_client(&mock_server, "mysite", "abc123").await;

    mock_server.reset().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&mock_server)
        .await;

    let err = client.sign_in().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.is_auth_error());
    assert_eq!(client.auth_token(), Some("abc123"));
}

#[tokio::test]
async fn test_sign_out_clears_token() {
    let mock_server = MockServer::start().await;
    let mut client = signed_in_client(&mock_server, "mysite", "abc123").await;

    Mock::given(method("POST"))
        .and(path("/api/2.5/auth/signout"))
        .and(header(AUTH_HEADER, "abc123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client.sign_out().await.unwrap();

    assert!(client.auth_token().is_none());
    assert!(!client.is_signed_in());
    assert!(client.signed_in_site_luid().is_none());
}

#[tokio::test]
async fn test_failed_sign_out_keeps_token() {
    let mock_server = MockServer::start().await;
    let mut client = signed_in_client(&mock_server, "mysite", "abc123").await;

    Mock::given(method("POST"))
        .and(path("/api/2.5/auth/signout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let err = client.sign_out().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(client.auth_token(), Some("abc123"));
}

#[tokio::test]
async fn test_sign_out_without_session_sends_no_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.5/auth/signout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    client.sign_out().await.unwrap();

    let requests = requests_to(&mock_server, "/auth/signout").await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get(AUTH_HEADER).is_none());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_sign_in_uses_configured_api_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.4/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": { "token": "v34-token" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server, "mysite");
    client.set_api_version("3.4");
    client.sign_in().await.unwrap();

    assert_eq!(client.auth_token(), Some("v34-token"));
}
