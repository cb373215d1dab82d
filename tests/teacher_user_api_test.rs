//! Teacher directory and user account integration tests
//!
//! Runs the `TeacherApi` and `UserApi` against a `wiremock` mock backend.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zenbook::api::{ApiClient, TeacherApi, UserApi};
use zenbook::config::ApiConfig;
use zenbook::error::ZenbookError;
use zenbook::identity::{Identity, IdentityStore};

fn make_client(base_url: &str) -> (ApiClient, Arc<IdentityStore>) {
    let identity = Arc::new(IdentityStore::new());
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
    };
    let client = ApiClient::new(&config, Arc::clone(&identity)).expect("client builds");
    (client, identity)
}

fn member() -> Identity {
    Identity {
        id: 7,
        username: "jane@studio.example".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        admin: false,
        token: "member-jwt".to_string(),
        token_type: "Bearer".to_string(),
    }
}

fn kind_of(err: &anyhow::Error) -> &ZenbookError {
    err.downcast_ref::<ZenbookError>().expect("typed error")
}

#[tokio::test]
async fn teacher_list_returns_the_directory() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teacher"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "firstName": "Margot", "lastName": "Delahaye"},
            {"id": 2, "firstName": "Helene", "lastName": "Thiercelin"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = make_client(&server.uri());
    let teachers = TeacherApi::new(client).all().await.expect("list succeeds");

    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0].display_name(), "Margot Delahaye");
}

#[tokio::test]
async fn teacher_detail_maps_missing_id_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teacher/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (client, _) = make_client(&server.uri());
    let err = TeacherApi::new(client)
        .detail(99)
        .await
        .expect_err("detail fails");

    assert!(matches!(kind_of(&err), ZenbookError::NotFound(_)));
}

#[tokio::test]
async fn user_detail_fetches_the_account() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/7"))
        .and(header("Authorization", "Bearer member-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "email": "jane@studio.example",
            "firstName": "Jane",
            "lastName": "Doe",
            "admin": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, identity) = make_client(&server.uri());
    identity.log_in(member());

    let user = UserApi::new(client).detail(7).await.expect("detail succeeds");
    assert_eq!(user.email, "jane@studio.example");
    assert!(!user.admin);
}

#[tokio::test]
async fn user_delete_issues_a_delete_for_the_account() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/user/7"))
        .and(header("Authorization", "Bearer member-jwt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (client, identity) = make_client(&server.uri());
    identity.log_in(member());

    UserApi::new(client).delete(7).await.expect("delete succeeds");
}

#[tokio::test]
async fn user_delete_maps_expired_session_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/user/7"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (client, _) = make_client(&server.uri());
    let err = UserApi::new(client).delete(7).await.expect_err("delete fails");

    assert!(matches!(kind_of(&err), ZenbookError::Unauthorized(_)));
}
