//! The Task entity and its lifecycle enums.
//!
//! A task is the single mutable record type of the system: it belongs to
//! exactly one owner, carries a three-valued [`TaskStatus`] plus a boolean
//! `completed` flag kept in sync with it, and optionally records which admin
//! assigned it. Construction goes through the smart constructors
//! [`Task::create`] and [`Task::assign`]; mutation goes through
//! [`Task::apply_patch`](super::patch) so the status/completed
//! reconciliation rule cannot be bypassed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use crate::domain::value_objects::{TaskId, Timestamp, UserId};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    /// Urgent work.
    High,
    /// Normal work. The default for new tasks.
    #[default]
    Medium,
    /// Backlog work.
    Low,
}

/// Task lifecycle status.
///
/// Serialized in kebab-case (`pending`, `in-progress`, `completed`) to match
/// the wire format consumed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started. The default for new tasks.
    #[default]
    Pending,
    /// Started but not finished.
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// Whether this status counts as completed.
    ///
    /// This is the single source of truth for the `completed` boolean: the
    /// flag equals `status.is_completed()` whenever `status` was the field
    /// last explicitly set.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A unit of work with an owner, priority, status, and optional due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, generated on creation.
    pub id: TaskId,
    /// Short text naming the task ("title" in admin-assignment flows).
    pub name: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Priority, defaulting to [`Priority::Medium`].
    pub priority: Priority,
    /// Lifecycle status, defaulting to [`TaskStatus::Pending`].
    pub status: TaskStatus,
    /// Boolean mirror of `status == Completed`, kept in sync on every write.
    pub completed: bool,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// The user this task belongs to. Immutable after creation.
    pub owner: UserId,
    /// The admin who created this task on behalf of `owner`; `None` for
    /// self-created tasks.
    pub assigned_by: Option<UserId>,
    /// Set once at creation.
    pub created_at: Timestamp,
    /// Updated on every mutation.
    pub updated_at: Timestamp,
}

impl Task {
    /// Creates a task owned by its creator.
    ///
    /// New tasks start as pending/not-completed regardless of input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] if `name` is empty.
    pub fn create(
        name: String,
        description: Option<String>,
        priority: Option<Priority>,
        due_date: Option<NaiveDate>,
        owner: UserId,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }

        Ok(Self {
            id: TaskId::generate(),
            name,
            description,
            priority: priority.unwrap_or_default(),
            status: TaskStatus::Pending,
            completed: false,
            due_date,
            owner,
            assigned_by: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a task on behalf of another user.
    ///
    /// The task is owned by `assigned_to`, not by the assigning admin; the
    /// admin is only recorded in `assigned_by`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] if `title` is empty.
    pub fn assign(
        title: String,
        description: Option<String>,
        assigned_to: UserId,
        assigned_by: UserId,
        priority: Option<Priority>,
        due_date: Option<NaiveDate>,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        let mut task = Self::create(title, description, priority, due_date, assigned_to, now)?;
        task.assigned_by = Some(assigned_by);
        Ok(task)
    }

    /// Whether `user` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner == *user
    }
}
