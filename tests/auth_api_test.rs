//! Authentication integration tests
//!
//! Runs the `AuthApi` against a `wiremock` mock backend, verifying the
//! login/register request bodies and the mapping of backend rejections.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zenbook::api::{ApiClient, AuthApi, LoginRequest, RegisterRequest};
use zenbook::config::ApiConfig;
use zenbook::error::ZenbookError;
use zenbook::identity::IdentityStore;

fn make_api(base_url: &str) -> (AuthApi, Arc<IdentityStore>) {
    let identity = Arc::new(IdentityStore::new());
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    };
    let client = ApiClient::new(&config, Arc::clone(&identity)).expect("client builds");
    (AuthApi::new(client), identity)
}

fn kind_of(err: &anyhow::Error) -> &ZenbookError {
    err.downcast_ref::<ZenbookError>().expect("typed error")
}

#[tokio::test]
async fn login_sends_credentials_and_returns_the_identity() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "jane@studio.example",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "type": "Bearer",
            "id": 1,
            "username": "jane@studio.example",
            "firstName": "Jane",
            "lastName": "Doe",
            "admin": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = make_api(&server.uri());
    let identity = api
        .login(&LoginRequest {
            email: "jane@studio.example".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login succeeds");

    assert_eq!(identity.id, 1);
    assert_eq!(identity.token, "jwt-token");
    assert_eq!(identity.display_name(), "Jane Doe");
    assert!(identity.admin);
}

#[tokio::test]
async fn login_defaults_the_credential_scheme_when_omitted() {
    let server = MockServer::start().await;

    // Some backend builds omit the `type` field and name the login `email`.
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "id": 1,
            "email": "jane@studio.example",
            "firstName": "Jane",
            "lastName": "Doe",
            "admin": false
        })))
        .mount(&server)
        .await;

    let (api, _) = make_api(&server.uri());
    let identity = api
        .login(&LoginRequest {
            email: "jane@studio.example".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("login succeeds");

    assert_eq!(identity.token_type, "Bearer");
    assert_eq!(identity.username, "jane@studio.example");
}

#[tokio::test]
async fn login_maps_rejected_credentials_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (api, _) = make_api(&server.uri());
    let err = api
        .login(&LoginRequest {
            email: "jane@studio.example".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("login fails");

    assert!(matches!(kind_of(&err), ZenbookError::Unauthorized(_)));
}

#[tokio::test]
async fn login_does_not_touch_the_identity_store() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "id": 1,
            "username": "jane@studio.example",
            "firstName": "Jane",
            "lastName": "Doe",
            "admin": false
        })))
        .mount(&server)
        .await;

    let (api, identity_store) = make_api(&server.uri());
    api.login(&LoginRequest {
        email: "jane@studio.example".to_string(),
        password: "secret".to_string(),
    })
    .await
    .expect("login succeeds");

    // Populating the store is the caller's decision, preserving the
    // single-writer discipline at the command layer.
    assert!(identity_store.current().is_none());
}

#[tokio::test]
async fn register_sends_the_exact_submission() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "email": "new@studio.example",
            "firstName": "New",
            "lastName": "Member",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = make_api(&server.uri());
    api.register(&RegisterRequest {
        email: "new@studio.example".to_string(),
        first_name: "New".to_string(),
        last_name: "Member".to_string(),
        password: "secret".to_string(),
    })
    .await
    .expect("register succeeds");
}

#[tokio::test]
async fn register_maps_taken_email_to_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let (api, _) = make_api(&server.uri());
    let err = api
        .register(&RegisterRequest {
            email: "taken@studio.example".to_string(),
            first_name: "Already".to_string(),
            last_name: "There".to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect_err("register fails");

    assert!(matches!(kind_of(&err), ZenbookError::Conflict(_)));
}
