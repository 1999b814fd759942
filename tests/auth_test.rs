mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use gymadmin::controllers::auth::{LOGIN_FAILURE_NOTICE, LOGIN_SUCCESS_NOTICE};
use gymadmin::controllers::{AuthController, ProfileController};
use gymadmin::navigation;
use gymadmin::AppError;

#[tokio::test]
async fn test_login_valid_credentials_stores_token() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/auth/login",
        StatusCode::OK,
        json!({ "data": { "token": "jwt-abc" } }),
    );
    let test = common::create_test_client(&backend.base_url);
    let auth = AuthController::new(&test.client);

    assert_ok!(auth.login("admin@gym.test", "secret123").await);

    assert_eq!(test.session.get().as_deref(), Some("jwt-abc"));
    assert_eq!(test.navigator.last().as_deref(), Some(navigation::DASHBOARD));
    assert!(test.notifier.contains(LOGIN_SUCCESS_NOTICE));

    let request = backend.last_request();
    assert_eq!(
        request.body,
        Some(json!({ "email": "admin@gym.test", "password": "secret123" }))
    );
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/auth/login",
        StatusCode::UNAUTHORIZED,
        json!({ "message": "Invalid email or password" }),
    );
    let test = common::create_test_client(&backend.base_url);
    let auth = AuthController::new(&test.client);

    assert_err!(auth.login("admin@gym.test", "wrongpass").await);

    assert!(!test.session.is_authenticated());
    assert!(test.navigator.all().is_empty());
    assert_eq!(test.notifier.last().unwrap().message, LOGIN_FAILURE_NOTICE);
}

#[tokio::test]
async fn test_login_rejects_malformed_input_without_request() {
    let backend = common::MockBackend::start().await;
    let test = common::create_test_client(&backend.base_url);
    let auth = AuthController::new(&test.client);

    let error = assert_err!(auth.login("not-an-email", "secret123").await);
    assert!(matches!(error, AppError::Validation(_)));

    assert_err!(auth.login("admin@gym.test", "123").await);
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_login_response_without_token_fails() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/auth/login",
        StatusCode::OK,
        json!({ "token": "top-level-token" }),
    );
    let test = common::create_test_client(&backend.base_url);
    let auth = AuthController::new(&test.client);

    let error = assert_err!(auth.login("admin@gym.test", "secret123").await);
    assert!(matches!(error, AppError::Decode(_)));
    assert!(!test.session.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());

    assert_ok!(AuthController::new(&test.client).logout());

    assert!(!test.session.is_authenticated());
    assert_eq!(test.navigator.last().as_deref(), Some(navigation::LOGIN));
}

#[tokio::test]
async fn test_logout_all_clears_session_even_when_backend_fails() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/auth/logout-all",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "boom" }),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let mut profile = ProfileController::new(&test.client);

    assert_ok!(profile.logout_all().await);

    assert!(!test.session.is_authenticated());
    assert_eq!(test.navigator.last().as_deref(), Some(navigation::LOGIN));
    assert_eq!(
        backend.last_request().authorization.as_deref(),
        Some("Bearer test-token")
    );
}

#[tokio::test]
async fn test_session_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = gymadmin::SessionStore::open(&path).unwrap();
    store.set("persisted").unwrap();

    let reopened = gymadmin::SessionStore::open(&path).unwrap();
    assert_eq!(reopened.get().as_deref(), Some("persisted"));

    reopened.clear().unwrap();
    let cleared = gymadmin::SessionStore::open(&path).unwrap();
    assert!(!cleared.is_authenticated());
}
