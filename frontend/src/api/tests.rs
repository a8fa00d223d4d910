#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

const SIGN_IN_PATH: &str = "/api/v1/user/signin";

fn request() -> SignInRequest {
    SignInRequest {
        email: "alice@example.com".into(),
        password: "secret-pass".into(),
    }
}

#[tokio::test]
async fn sign_in_posts_credentials_as_json() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(SIGN_IN_PATH)
            .header("content-type", "application/json")
            .json_body(json!({
                "email": "alice@example.com",
                "password": "secret-pass"
            }));
        then.status(200).json_body(json!({ "token": "ignored" }));
    });

    let client = ApiClient::new_with_endpoint(server.url(SIGN_IN_PATH));
    client.sign_in(&request()).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn sign_in_treats_any_2xx_as_success_regardless_of_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(SIGN_IN_PATH);
        then.status(201).body("not json at all");
    });

    let client = ApiClient::new_with_endpoint(server.url(SIGN_IN_PATH));
    assert_eq!(client.sign_in(&request()).await, Ok(()));
}

#[tokio::test]
async fn sign_in_surfaces_rejection_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(SIGN_IN_PATH);
        then.status(401)
            .json_body(json!({ "message": "Invalid credentials" }));
    });

    let client = ApiClient::new_with_endpoint(server.url(SIGN_IN_PATH));
    let err = client.sign_in(&request()).await.unwrap_err();
    assert_eq!(err, SignInError::rejected(401, Some("Invalid credentials")));
}

#[tokio::test]
async fn sign_in_rejection_without_body_has_no_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(SIGN_IN_PATH);
        then.status(500);
    });

    let client = ApiClient::new_with_endpoint(server.url(SIGN_IN_PATH));
    let err = client.sign_in(&request()).await.unwrap_err();
    assert_eq!(err, SignInError::rejected(500, None));
}

#[tokio::test]
async fn sign_in_rejection_with_unparsable_body_has_no_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(SIGN_IN_PATH);
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let client = ApiClient::new_with_endpoint(server.url(SIGN_IN_PATH));
    let err = client.sign_in(&request()).await.unwrap_err();
    assert_eq!(err, SignInError::rejected(502, None));
}

#[tokio::test]
async fn sign_in_reports_transport_failure_when_unreachable() {
    // Nothing listens on the discard port.
    let client = ApiClient::new_with_endpoint("http://127.0.0.1:9/api/v1/user/signin");
    let err = client.sign_in(&request()).await.unwrap_err();
    assert!(matches!(err, SignInError::Transport(_)));
}
