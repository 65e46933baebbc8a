//! Admin handlers: task assignment and progress reporting.
//!
//! Every handler here takes an [`AdminUser`], so the authentication and
//! authorization gates have both passed before any body runs.

use std::collections::BTreeSet;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::requests::AssignTaskRequest;
use crate::api::dto::responses::{AssignedTaskResponse, TaskResponse, UserProgressResponse};
use crate::api::dto::transformers::{
    assigned_task_to_response, progress_to_response, task_to_response,
};
use crate::api::middleware::AdminUser;
use crate::api::middleware::error_handler::{
    ApiErrorResponse, domain_error_to_response, repository_error_to_response,
};
use crate::application::queries::summarize_progress;
use crate::domain::task::Task;
use crate::domain::user::User;
use crate::domain::value_objects::{Timestamp, UserId};
use crate::infrastructure::AppDependencies;

/// POST /api/admin/assign-task - Create a task on behalf of another user.
///
/// The task is owned by `assignedTo`; the calling admin is recorded in
/// `assignedBy` and retains no ownership. The assignee id is not checked
/// against the user collection — a task can be assigned to an id with no
/// user record behind it, and the listing join then reports a null owner.
///
/// # Response
///
/// - `201 Created` - The created task
/// - `422 Unprocessable Entity` - Blank title
pub async fn assign_task(
    State(dependencies): State<AppDependencies>,
    AdminUser(admin): AdminUser,
    Json(request): Json<AssignTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse> {
    let task = Task::assign(
        request.title,
        request.description,
        request.assigned_to,
        admin.id,
        request.priority,
        request.due_date,
        Timestamp::now(),
    )
    .map_err(|error| domain_error_to_response(&error))?;

    dependencies
        .tasks()
        .insert(&task)
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    tracing::info!(
        task = %task.id,
        assignee = %task.owner,
        admin = %admin.id,
        "task assigned"
    );

    Ok((StatusCode::CREATED, Json(task_to_response(&task))))
}

/// GET /api/admin/assigned-tasks - Tasks the caller assigned, newest first,
/// with each owner's name/email joined in.
pub async fn list_assigned_tasks(
    State(dependencies): State<AppDependencies>,
    AdminUser(admin): AdminUser,
) -> Result<Json<Vec<AssignedTaskResponse>>, ApiErrorResponse> {
    let tasks = assigned_tasks(&dependencies, &admin.id).await?;
    let owners = owners_of(&dependencies, &tasks).await?;

    let responses = tasks
        .iter()
        .map(|task| {
            let owner = owners.iter().find(|user| user.id == task.owner);
            assigned_task_to_response(task, owner)
        })
        .collect();

    Ok(Json(responses))
}

/// GET /api/admin/user-progress - Per-assignee task counts.
///
/// Groups the caller's assigned tasks by owner; each row satisfies
/// `totalTasks == completedTasks + pendingTasks + inProgressTasks`, and the
/// row totals sum to the caller's assigned-task count (less any tasks whose
/// assignee has no user record).
pub async fn user_progress(
    State(dependencies): State<AppDependencies>,
    AdminUser(admin): AdminUser,
) -> Result<Json<Vec<UserProgressResponse>>, ApiErrorResponse> {
    let tasks = assigned_tasks(&dependencies, &admin.id).await?;
    let owners = owners_of(&dependencies, &tasks).await?;

    let rows = summarize_progress(&tasks, &owners);

    Ok(Json(rows.iter().map(progress_to_response).collect()))
}

// =============================================================================
// Helpers
// =============================================================================

async fn assigned_tasks(
    dependencies: &AppDependencies,
    admin: &UserId,
) -> Result<Vec<Task>, ApiErrorResponse> {
    dependencies
        .tasks()
        .list_by_assigner(admin)
        .await
        .map_err(|error| repository_error_to_response(&error))
}

/// Loads the user records behind the distinct owners of `tasks`.
async fn owners_of(
    dependencies: &AppDependencies,
    tasks: &[Task],
) -> Result<Vec<User>, ApiErrorResponse> {
    let owner_ids: Vec<UserId> = tasks
        .iter()
        .map(|task| task.owner)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    dependencies
        .users()
        .find_by_ids(&owner_ids)
        .await
        .map_err(|error| repository_error_to_response(&error))
}
