//! Pure transformations from domain types to response DTOs.

use super::responses::{
    AssignedTaskResponse, OwnerSummary, TaskResponse, UserProgressResponse, UserResponse,
};
use crate::application::queries::UserProgress;
use crate::domain::task::Task;
use crate::domain::user::User;

/// Converts a task to its API representation.
#[must_use]
pub fn task_to_response(task: &Task) -> TaskResponse {
    TaskResponse {
        id: task.id,
        name: task.name.clone(),
        description: task.description.clone(),
        priority: task.priority,
        status: task.status,
        completed: task.completed,
        due_date: task.due_date,
        owner: task.owner,
        assigned_by: task.assigned_by,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

/// Converts a task to the admin listing representation, joining the owner's
/// identity when it resolved.
#[must_use]
pub fn assigned_task_to_response(task: &Task, owner: Option<&User>) -> AssignedTaskResponse {
    AssignedTaskResponse {
        id: task.id,
        name: task.name.clone(),
        description: task.description.clone(),
        priority: task.priority,
        status: task.status,
        completed: task.completed,
        due_date: task.due_date,
        owner: owner.map(|user| OwnerSummary {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }),
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

/// Converts a user to its public API representation.
#[must_use]
pub fn user_to_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role,
    }
}

/// Flattens an aggregation row to its API representation.
#[must_use]
pub fn progress_to_response(progress: &UserProgress) -> UserProgressResponse {
    UserProgressResponse {
        user_id: progress.user_id,
        name: progress.name.clone(),
        email: progress.email.clone(),
        total_tasks: progress.counts.total,
        completed_tasks: progress.counts.completed,
        pending_tasks: progress.counts.pending,
        in_progress_tasks: progress.counts.in_progress,
    }
}
