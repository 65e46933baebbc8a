//! Integration tests for registration and login.

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

use crate::common::TestApp;

#[rstest]
#[tokio::test]
async fn register_returns_token_and_user() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Alice",
                "email": "alice@example.com",
                "password": "hunter2",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(!response.json["token"].as_str().unwrap().is_empty());
    assert_eq!(response.json["user"]["email"], "alice@example.com");
    assert_eq!(response.json["user"]["role"], "user");
    assert!(response.json["user"].get("password_hash").is_none());
}

#[rstest]
#[tokio::test]
async fn registered_token_opens_protected_routes() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;

    let response = app.get("/api/tasks", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!([]));
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_rejected_with_409() {
    let app = TestApp::new();
    app.register_user("Alice", "alice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Other Alice",
                "email": "alice@example.com",
                "password": "different",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), "Email already registered");
}

#[rstest]
#[case("name", json!({"name": " ", "email": "a@example.com", "password": "hunter2"}))]
#[case("email", json!({"name": "Alice", "email": "", "password": "hunter2"}))]
#[case("password", json!({"name": "Alice", "email": "a@example.com", "password": ""}))]
#[tokio::test]
async fn blank_required_fields_are_rejected(
    #[case] field: &str,
    #[case] body: serde_json::Value,
) {
    let app = TestApp::new();

    let response = app.request("POST", "/api/auth/register", None, Some(body)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.message(), format!("{field} is required"));
}

#[rstest]
#[tokio::test]
async fn login_round_trips_registered_credentials() {
    let app = TestApp::new();
    app.register_user("Alice", "alice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "hunter2" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.json["token"].as_str().unwrap();
    let listing = app.get("/api/tasks", token).await;
    assert_eq!(listing.status, StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn wrong_password_and_unknown_email_fail_alike() {
    let app = TestApp::new();
    app.register_user("Alice", "alice@example.com").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "alice@example.com", "password": "wrong" })),
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "hunter2" })),
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.message(), unknown_email.message());
}

#[rstest]
#[tokio::test]
async fn tampered_token_is_rejected() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;
    let tampered = format!("{token}x");

    let response = app.get("/api/tasks", &tampered).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token is not valid");
}
