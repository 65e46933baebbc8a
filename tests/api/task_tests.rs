//! Integration tests for the owner-scoped task CRUD endpoints.

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

use crate::common::TestApp;

// =============================================================================
// Create
// =============================================================================

#[rstest]
#[tokio::test]
async fn create_task_defaults_to_pending_medium() {
    let app = TestApp::new();
    let (token, user_id) = app.register_user("Alice", "alice@example.com").await;

    let response = app
        .post(
            "/api/tasks",
            &token,
            json!({ "name": "Write report", "dueDate": "2025-06-30" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json["name"], "Write report");
    assert_eq!(response.json["priority"], "Medium");
    assert_eq!(response.json["status"], "pending");
    assert_eq!(response.json["completed"], false);
    assert_eq!(response.json["dueDate"], "2025-06-30");
    assert_eq!(response.json["owner"], user_id.as_str());
    assert_eq!(response.json["assignedBy"], serde_json::Value::Null);
}

#[rstest]
#[tokio::test]
async fn create_task_rejects_blank_name() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;

    let response = app.post("/api/tasks", &token, json!({ "name": "  " })).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.message(), "name is required");
}

// =============================================================================
// List
// =============================================================================

#[rstest]
#[tokio::test]
async fn list_returns_only_own_tasks_newest_first() {
    let app = TestApp::new();
    let (alice, _) = app.register_user("Alice", "alice@example.com").await;
    let (bob, _) = app.register_user("Bob", "bob@example.com").await;

    let first = app.create_task(&alice, "First").await;
    let second = app.create_task(&alice, "Second").await;
    app.create_task(&bob, "Bob's task").await;

    let response = app.get("/api/tasks", &alice).await;

    assert_eq!(response.status, StatusCode::OK);
    let tasks = response.json.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["id"], second.as_str());
    assert_eq!(tasks[1]["id"], first.as_str());
}

// =============================================================================
// Update
// =============================================================================

#[rstest]
#[case("completed", true)]
#[case("pending", false)]
#[case("in-progress", false)]
#[tokio::test]
async fn updating_status_syncs_completed(#[case] status: &str, #[case] completed: bool) {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;
    let task_id = app.create_task(&token, "Write report").await;

    let response = app
        .put(
            &format!("/api/tasks/{task_id}"),
            &token,
            json!({ "status": status }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["status"], status);
    assert_eq!(response.json["completed"], completed);
}

#[rstest]
#[tokio::test]
async fn updating_completed_alone_derives_status() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;
    let task_id = app.create_task(&token, "Write report").await;

    let completed = app
        .put(
            &format!("/api/tasks/{task_id}"),
            &token,
            json!({ "completed": true }),
        )
        .await;
    assert_eq!(completed.json["status"], "completed");

    let reverted = app
        .put(
            &format!("/api/tasks/{task_id}"),
            &token,
            json!({ "completed": false }),
        )
        .await;
    assert_eq!(reverted.json["status"], "pending");
    assert_eq!(reverted.json["completed"], false);
}

#[rstest]
#[tokio::test]
async fn update_leaves_absent_fields_unchanged() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;
    let task_id = app.create_task(&token, "Write report").await;
    app.put(
        &format!("/api/tasks/{task_id}"),
        &token,
        json!({ "description": "Quarterly numbers", "priority": "High" }),
    )
    .await;

    let response = app
        .put(
            &format!("/api/tasks/{task_id}"),
            &token,
            json!({ "name": "Rewrite report" }),
        )
        .await;

    assert_eq!(response.json["name"], "Rewrite report");
    assert_eq!(response.json["description"], "Quarterly numbers");
    assert_eq!(response.json["priority"], "High");
}

#[rstest]
#[tokio::test]
async fn update_by_non_owner_is_401_even_for_admin() {
    let app = TestApp::new();
    let (alice, _) = app.register_user("Alice", "alice@example.com").await;
    let (admin, _) = app.register_admin("Root", "root@example.com").await;
    let task_id = app.create_task(&alice, "Private task").await;

    let response = app
        .put(
            &format!("/api/tasks/{task_id}"),
            &admin,
            json!({ "status": "completed" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Not authorized");
}

#[rstest]
#[tokio::test]
async fn update_unknown_task_is_404() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;

    let response = app
        .put(
            "/api/tasks/01234567-89ab-cdef-0123-456789abcdef",
            &token,
            json!({ "name": "Nope" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Task not found");
}

#[rstest]
#[tokio::test]
async fn update_with_malformed_id_is_400() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;

    let response = app
        .put("/api/tasks/not-a-uuid", &token, json!({ "name": "Nope" }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[rstest]
#[tokio::test]
async fn delete_then_update_is_404() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;
    let task_id = app.create_task(&token, "Ephemeral").await;

    let deleted = app.delete(&format!("/api/tasks/{task_id}"), &token).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.message(), "Task deleted successfully");

    let gone = app
        .put(&format!("/api/tasks/{task_id}"), &token, json!({}))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let listing = app.get("/api/tasks", &token).await;
    assert_eq!(listing.json.as_array().unwrap().len(), 0);
}

#[rstest]
#[tokio::test]
async fn delete_by_non_owner_is_401_and_keeps_task() {
    let app = TestApp::new();
    let (alice, _) = app.register_user("Alice", "alice@example.com").await;
    let (bob, _) = app.register_user("Bob", "bob@example.com").await;
    let task_id = app.create_task(&alice, "Private task").await;

    let response = app.delete(&format!("/api/tasks/{task_id}"), &bob).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let listing = app.get("/api/tasks", &alice).await;
    assert_eq!(listing.json.as_array().unwrap().len(), 1);
}
