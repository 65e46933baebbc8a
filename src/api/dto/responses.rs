//! Response DTOs.
//!
//! Outgoing bodies use camelCase field names. Optional fields serialize as
//! `null` rather than being omitted, matching what the client already
//! handles. The DTOs also derive `Deserialize` so the integration suites
//! can read responses back with the same types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::task::{Priority, TaskStatus};
use crate::domain::user::Role;
use crate::domain::value_objects::{TaskId, Timestamp, UserId};

/// A task as returned by the Task and Admin APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task id.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority.
    pub priority: Priority,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Completed flag, in sync with `status`.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// The owning user's id.
    pub owner: UserId,
    /// The assigning admin's id, when admin-assigned.
    pub assigned_by: Option<UserId>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last mutation time.
    pub updated_at: Timestamp,
}

/// The joined owner identity on admin listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    /// The owner's id.
    pub id: UserId,
    /// The owner's display name.
    pub name: String,
    /// The owner's email.
    pub email: String,
}

/// A task on the admin assigned-tasks listing, with the owner joined in.
///
/// `owner` is `null` when the assignee id does not resolve to a user —
/// possible because assignment does not validate the target id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTaskResponse {
    /// Task id.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority.
    pub priority: Priority,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Completed flag.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// The owner's identity, when the owner exists.
    pub owner: Option<OwnerSummary>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last mutation time.
    pub updated_at: Timestamp,
}

/// One per-assignee row of the admin progress report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressResponse {
    /// The assignee's id.
    pub user_id: UserId,
    /// The assignee's display name.
    pub name: String,
    /// The assignee's email.
    pub email: String,
    /// All tasks the requesting admin assigned to this user.
    pub total_tasks: u64,
    /// Of those, tasks with status `completed`.
    pub completed_tasks: u64,
    /// Of those, tasks with status `pending`.
    pub pending_tasks: u64,
    /// Of those, tasks with status `in-progress`.
    pub in_progress_tasks: u64,
}

/// A user as returned by the auth and user-listing endpoints. Carries no
/// credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Capability level.
    pub role: Role,
}

/// Token plus identity, returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The signed bearer token for the `x-auth-token` header.
    pub token: String,
    /// The authenticated user.
    pub user: UserResponse,
}

/// A bare confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}
