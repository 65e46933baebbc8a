//! Request DTOs.
//!
//! Incoming bodies use the camelCase field names the client already sends.
//! Validation beyond shape (non-blank name, ownership) happens in the
//! domain layer during transformation.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::task::Priority;
use crate::domain::user::Role;
use crate::domain::value_objects::UserId;

/// Request body for creating one's own task.
///
/// # Example JSON
///
/// ```json
/// {
///     "name": "Write report",
///     "priority": "High",
///     "dueDate": "2025-01-01"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// The task name. Required; blank values are rejected.
    pub name: String,
    /// Optional priority; defaults to Medium.
    pub priority: Option<Priority>,
    /// Optional due date.
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
}

/// Request body for an admin assigning a task to a user.
///
/// The task name arrives as `title` in this flow; it lands in the same
/// `name` field of the task.
///
/// # Example JSON
///
/// ```json
/// {
///     "title": "Redesign",
///     "description": "Landing page refresh",
///     "assignedTo": "01234567-89ab-cdef-0123-456789abcdef",
///     "priority": "High",
///     "dueDate": "2025-01-01"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignTaskRequest {
    /// The task name.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// The user the task is assigned to. Not validated against the user
    /// collection; see the assign handler.
    #[serde(rename = "assignedTo")]
    pub assigned_to: UserId,
    /// Optional priority; defaults to Medium.
    pub priority: Option<Priority>,
    /// Optional due date.
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
}

/// Request body for registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plain-text password; hashed before storage, never persisted.
    pub password: String,
    /// Optional role; defaults to `user`.
    pub role: Option<Role>,
}

/// Request body for login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}
