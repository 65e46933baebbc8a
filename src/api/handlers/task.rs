//! Task CRUD handlers.
//!
//! All four operations require an authenticated caller and are scoped to
//! that caller as owner: listing filters on it, create stamps it, and
//! update/delete check it before touching anything. Admin capability buys
//! nothing here; a task is mutable only by its owner.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::CreateTaskRequest;
use crate::api::dto::responses::{MessageResponse, TaskResponse};
use crate::api::dto::transformers::task_to_response;
use crate::api::middleware::CurrentUser;
use crate::api::middleware::error_handler::{
    ApiErrorResponse, domain_error_to_response, repository_error_to_response,
};
use crate::domain::task::{DomainError, Task, TaskPatch};
use crate::domain::value_objects::{TaskId, Timestamp};
use crate::infrastructure::AppDependencies;

/// POST /api/tasks - Create a task owned by the caller.
///
/// New tasks always start pending and not completed.
///
/// # Response
///
/// - `201 Created` - The created task
/// - `422 Unprocessable Entity` - Blank name
pub async fn create_task(
    State(dependencies): State<AppDependencies>,
    current_user: CurrentUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse> {
    let task = Task::create(
        request.name,
        None,
        request.priority,
        request.due_date,
        current_user.id,
        Timestamp::now(),
    )
    .map_err(|error| domain_error_to_response(&error))?;

    dependencies
        .tasks()
        .insert(&task)
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    tracing::info!(task = %task.id, owner = %task.owner, "task created");

    Ok((StatusCode::CREATED, Json(task_to_response(&task))))
}

/// GET /api/tasks - List the caller's tasks, newest first.
pub async fn list_tasks(
    State(dependencies): State<AppDependencies>,
    current_user: CurrentUser,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let tasks = dependencies
        .tasks()
        .list_by_owner(&current_user.id)
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    Ok(Json(tasks.iter().map(task_to_response).collect()))
}

/// PUT /api/tasks/{id} - Partially update one of the caller's tasks.
///
/// Only fields present in the body change; the status/completed
/// reconciliation is applied by [`Task::apply_patch`].
///
/// # Response
///
/// - `200 OK` - The updated task
/// - `400 Bad Request` - Malformed task id
/// - `401 Unauthorized` - Caller does not own the task
/// - `404 Not Found` - No task with that id
pub async fn update_task(
    State(dependencies): State<AppDependencies>,
    current_user: CurrentUser,
    Path(task_id_string): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let task_id = parse_task_id(&task_id_string)?;
    let task = load_owned_task(&dependencies, &task_id, &current_user).await?;

    let updated = task.apply_patch(&patch, Timestamp::now());

    dependencies
        .tasks()
        .update(&updated)
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    Ok(Json(task_to_response(&updated)))
}

/// DELETE /api/tasks/{id} - Permanently delete one of the caller's tasks.
///
/// # Response
///
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Malformed task id
/// - `401 Unauthorized` - Caller does not own the task
/// - `404 Not Found` - No task with that id
pub async fn delete_task(
    State(dependencies): State<AppDependencies>,
    current_user: CurrentUser,
    Path(task_id_string): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    let task_id = parse_task_id(&task_id_string)?;
    load_owned_task(&dependencies, &task_id, &current_user).await?;

    dependencies
        .tasks()
        .delete(&task_id)
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    tracing::info!(task = %task_id, owner = %current_user.id, "task deleted");

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_task_id(value: &str) -> Result<TaskId, ApiErrorResponse> {
    TaskId::parse(value).map_err(|_| ApiErrorResponse::invalid_task_id(value))
}

/// Fetches a task and verifies the caller owns it.
///
/// Existence is checked before ownership, so an unknown id is always 404
/// and a foreign id is always 401, in that order.
async fn load_owned_task(
    dependencies: &AppDependencies,
    task_id: &TaskId,
    current_user: &CurrentUser,
) -> Result<Task, ApiErrorResponse> {
    let task = dependencies
        .tasks()
        .find_by_id(task_id)
        .await
        .map_err(|error| repository_error_to_response(&error))?
        .ok_or_else(|| domain_error_to_response(&DomainError::TaskNotFound(*task_id)))?;

    if !task.is_owned_by(&current_user.id) {
        return Err(domain_error_to_response(&DomainError::NotOwner(*task_id)));
    }

    Ok(task)
}
