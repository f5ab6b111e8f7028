//! Mock server tests for signup, login and logout.

use std::sync::Arc;

use jwtauth_core::traits::keys;
use jwtauth_core::{BaseUrl, CredentialPair, CredentialStore, Credentials, Error, SignupRequest};
use jwtauth_http::{Accounts, ApiClient, MemoryStore};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn accounts(server: &MockServer) -> (Accounts, Arc<MemoryStore>) {
    let api = ApiClient::new(BaseUrl::new(server.uri()).unwrap()).unwrap();
    let store = Arc::new(MemoryStore::new());
    (Accounts::new(api, store.clone()), store)
}

#[tokio::test]
async fn test_signup_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(body_json(json!({
            "username": "alice",
            "fullname": "Alice Liddell",
            "password": "secret123"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "User created successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (accounts, store) = accounts(&server);
    let message = accounts
        .signup(&SignupRequest::new("alice", "Alice Liddell", "secret123"))
        .await
        .unwrap();

    assert_eq!(message, "User created successfully");
    // Signup does not log in.
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Username already exists"})),
        )
        .mount(&server)
        .await;

    let (accounts, _) = accounts(&server);
    let err = accounts
        .signup(&SignupRequest::new("alice", "Alice Liddell", "secret123"))
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("Username already exists"));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_signup_validates_before_sending() {
    let server = MockServer::start().await;

    let (accounts, _) = accounts(&server);
    let err = accounts
        .signup(&SignupRequest::new("alice", "Alice Liddell", "123"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_stores_pair_and_fullname() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "user_id": "u1",
                "fullname": "Alice Liddell",
                "username": "alice",
                "password": "$2a$10$hash"
            },
            "token": "access-1",
            "refresh_token": "refresh-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (accounts, store) = accounts(&server);
    let output = accounts
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    assert_eq!(output.user.user_id, "u1");
    assert_eq!(output.pair, CredentialPair::new("access-1", "refresh-1"));

    assert_eq!(
        store.credential_pair().await.unwrap(),
        Some(CredentialPair::new("access-1", "refresh-1"))
    );
    assert_eq!(
        accounts.fullname().await.unwrap().as_deref(),
        Some("Alice Liddell")
    );
}

#[tokio::test]
async fn test_login_invalid_username() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Invalid username. User is not found"})),
        )
        .mount(&server)
        .await;

    let (accounts, store) = accounts(&server);
    let err = accounts
        .login(&Credentials::new("nobody", "secret123"))
        .await
        .unwrap_err();

    assert_eq!(
        err.server_message(),
        Some("Invalid username. User is not found")
    );
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_login_error_object_uses_status_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": {}})))
        .mount(&server)
        .await;

    let (accounts, _) = accounts(&server);
    let err = accounts
        .login(&Credentials::new("alice", "wrong-password"))
        .await
        .unwrap_err();

    assert_eq!(err.server_message(), Some("Unauthorized"));
}

#[tokio::test]
async fn test_logout_clears_store() {
    let server = MockServer::start().await;

    let (accounts, store) = accounts(&server);
    store
        .set_pair(&CredentialPair::new("a", "r"))
        .await
        .unwrap();
    store.set(keys::FULLNAME, "Alice").await.unwrap();

    accounts.logout().await.unwrap();

    assert!(store.snapshot().await.is_empty());
    assert!(accounts.fullname().await.unwrap().is_none());
}
