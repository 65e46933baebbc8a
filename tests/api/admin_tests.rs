//! Integration tests for the admin assignment and progress endpoints.

use axum::http::StatusCode;
use rstest::rstest;
use serde_json::json;

use crate::common::TestApp;

// =============================================================================
// Authorization Gate
// =============================================================================

#[rstest]
#[case::assign("POST", "/api/admin/assign-task")]
#[case::assigned("GET", "/api/admin/assigned-tasks")]
#[case::progress("GET", "/api/admin/user-progress")]
#[tokio::test]
async fn admin_routes_reject_regular_users(#[case] method: &str, #[case] uri: &str) {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;

    let response = app
        .request(method, uri, Some(&token), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Access denied. Admin only.");
}

// =============================================================================
// Assign
// =============================================================================

#[rstest]
#[tokio::test]
async fn assign_creates_task_owned_by_assignee() {
    let app = TestApp::new();
    let (admin_token, admin_id) = app.register_admin("Root", "root@example.com").await;
    let (_, alice_id) = app.register_user("Alice", "alice@example.com").await;

    let response = app
        .post(
            "/api/admin/assign-task",
            &admin_token,
            json!({
                "title": "Redesign",
                "description": "Landing page refresh",
                "assignedTo": alice_id,
                "priority": "High",
                "dueDate": "2025-01-01",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json["name"], "Redesign");
    assert_eq!(response.json["owner"], alice_id.as_str());
    assert_eq!(response.json["assignedBy"], admin_id.as_str());
    assert_eq!(response.json["status"], "pending");
    assert_eq!(response.json["completed"], false);
    assert_eq!(response.json["priority"], "High");
}

#[rstest]
#[tokio::test]
async fn assigned_task_appears_in_assignee_listing() {
    let app = TestApp::new();
    let (admin_token, _) = app.register_admin("Root", "root@example.com").await;
    let (alice_token, alice_id) = app.register_user("Alice", "alice@example.com").await;

    app.post(
        "/api/admin/assign-task",
        &admin_token,
        json!({ "title": "Redesign", "assignedTo": alice_id }),
    )
    .await;

    let listing = app.get("/api/tasks", &alice_token).await;

    let tasks = listing.json.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["name"], "Redesign");
}

#[rstest]
#[tokio::test]
async fn assign_does_not_validate_assignee_existence() {
    // Accepted gap carried over from the original system: the target id is
    // not checked against the user collection.
    let app = TestApp::new();
    let (admin_token, _) = app.register_admin("Root", "root@example.com").await;

    let response = app
        .post(
            "/api/admin/assign-task",
            &admin_token,
            json!({
                "title": "Ghost work",
                "assignedTo": "01234567-89ab-cdef-0123-456789abcdef",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);

    // The listing join reports a null owner for the ghost assignee.
    let listing = app.get("/api/admin/assigned-tasks", &admin_token).await;
    let tasks = listing.json.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["owner"], serde_json::Value::Null);
}

// =============================================================================
// Assigned Listing
// =============================================================================

#[rstest]
#[tokio::test]
async fn assigned_listing_joins_owner_and_filters_by_assigner() {
    let app = TestApp::new();
    let (admin_token, _) = app.register_admin("Root", "root@example.com").await;
    let (other_admin_token, _) = app.register_admin("Boss", "boss@example.com").await;
    let (alice_token, alice_id) = app.register_user("Alice", "alice@example.com").await;

    // One task assigned by each admin, plus a self-created one.
    app.post(
        "/api/admin/assign-task",
        &admin_token,
        json!({ "title": "From Root", "assignedTo": alice_id }),
    )
    .await;
    app.post(
        "/api/admin/assign-task",
        &other_admin_token,
        json!({ "title": "From Boss", "assignedTo": alice_id }),
    )
    .await;
    app.create_task(&alice_token, "Self-created").await;

    let listing = app.get("/api/admin/assigned-tasks", &admin_token).await;

    assert_eq!(listing.status, StatusCode::OK);
    let tasks = listing.json.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["name"], "From Root");
    assert_eq!(tasks[0]["owner"]["name"], "Alice");
    assert_eq!(tasks[0]["owner"]["email"], "alice@example.com");
}

// =============================================================================
// User Progress
// =============================================================================

#[rstest]
#[tokio::test]
async fn progress_counts_satisfy_the_sum_contract() {
    let app = TestApp::new();
    let (admin_token, _) = app.register_admin("Root", "root@example.com").await;
    let (alice_token, alice_id) = app.register_user("Alice", "alice@example.com").await;
    let (_, bob_id) = app.register_user("Bob", "bob@example.com").await;

    for title in ["One", "Two", "Three"] {
        app.post(
            "/api/admin/assign-task",
            &admin_token,
            json!({ "title": title, "assignedTo": alice_id }),
        )
        .await;
    }
    app.post(
        "/api/admin/assign-task",
        &admin_token,
        json!({ "title": "Four", "assignedTo": bob_id }),
    )
    .await;

    // Alice finishes one and starts another.
    let listing = app.get("/api/tasks", &alice_token).await;
    let tasks = listing.json.as_array().unwrap();
    app.put(
        &format!("/api/tasks/{}", tasks[0]["id"].as_str().unwrap()),
        &alice_token,
        json!({ "status": "completed" }),
    )
    .await;
    app.put(
        &format!("/api/tasks/{}", tasks[1]["id"].as_str().unwrap()),
        &alice_token,
        json!({ "status": "in-progress" }),
    )
    .await;

    let progress = app.get("/api/admin/user-progress", &admin_token).await;

    assert_eq!(progress.status, StatusCode::OK);
    let rows = progress.json.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let mut grand_total = 0;
    for row in rows {
        let total = row["totalTasks"].as_u64().unwrap();
        let sum = row["completedTasks"].as_u64().unwrap()
            + row["pendingTasks"].as_u64().unwrap()
            + row["inProgressTasks"].as_u64().unwrap();
        assert_eq!(total, sum);
        grand_total += total;
    }
    assert_eq!(grand_total, 4);

    let alice_row = rows
        .iter()
        .find(|row| row["userId"] == alice_id.as_str())
        .unwrap();
    assert_eq!(alice_row["totalTasks"], 3);
    assert_eq!(alice_row["completedTasks"], 1);
    assert_eq!(alice_row["inProgressTasks"], 1);
    assert_eq!(alice_row["pendingTasks"], 1);
}

#[rstest]
#[tokio::test]
async fn assign_complete_progress_scenario() {
    // The end-to-end scenario: admin assigns, user completes, progress
    // reports one fully completed task.
    let app = TestApp::new();
    let (admin_token, admin_id) = app.register_admin("Root", "root@example.com").await;
    let (alice_token, alice_id) = app.register_user("Alice", "alice@example.com").await;

    let assigned = app
        .post(
            "/api/admin/assign-task",
            &admin_token,
            json!({
                "title": "Redesign",
                "assignedTo": alice_id,
                "priority": "High",
                "dueDate": "2025-01-01",
            }),
        )
        .await;
    assert_eq!(assigned.json["owner"], alice_id.as_str());
    assert_eq!(assigned.json["assignedBy"], admin_id.as_str());
    assert_eq!(assigned.json["status"], "pending");
    assert_eq!(assigned.json["completed"], false);

    let task_id = assigned.json["id"].as_str().unwrap();
    let updated = app
        .put(
            &format!("/api/tasks/{task_id}"),
            &alice_token,
            json!({ "status": "completed" }),
        )
        .await;
    assert_eq!(updated.json["completed"], true);

    let progress = app.get("/api/admin/user-progress", &admin_token).await;
    let rows = progress.json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["userId"], alice_id.as_str());
    assert_eq!(rows[0]["totalTasks"], 1);
    assert_eq!(rows[0]["completedTasks"], 1);
    assert_eq!(rows[0]["pendingTasks"], 0);
    assert_eq!(rows[0]["inProgressTasks"], 0);
}

// =============================================================================
// User Listing
// =============================================================================

#[rstest]
#[tokio::test]
async fn user_listing_returns_everyone_without_credentials() {
    let app = TestApp::new();
    let (token, _) = app.register_user("Alice", "alice@example.com").await;
    app.register_user("Bob", "bob@example.com").await;

    let response = app.get("/api/users", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
        assert!(user.get("passwordHash").is_none());
    }
}
