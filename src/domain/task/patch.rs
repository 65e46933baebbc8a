//! Partial task updates and the status/completed reconciliation rule.
//!
//! The update endpoint accepts any subset of the mutable task fields. That
//! subset is represented explicitly as a [`TaskPatch`] with one `Option` per
//! field, and applied by the pure function [`Task::apply_patch`], so the
//! reconciliation between `status` and `completed` is unit-testable without
//! any HTTP or storage machinery.
//!
//! # Reconciliation rule
//!
//! Applied in this order:
//!
//! 1. If the patch carries `status`, the task takes it and `completed`
//!    becomes `status == completed`.
//! 2. Otherwise, if the patch carries `completed`, the task takes it and
//!    `status` is derived as `completed`/`pending`.
//!
//! Rule 2 cannot produce `in-progress`: toggling only the boolean collapses
//! an in-progress task back to pending. This matches the observed behavior
//! of the system being reimplemented and must not change without a product
//! decision.

use chrono::NaiveDate;
use serde::Deserialize;

use super::entity::{Priority, Task, TaskStatus};
use crate::domain::value_objects::Timestamp;

/// A partial update to a task.
///
/// Fields that are `None` leave the task unchanged. The owner is not
/// patchable; it is fixed at creation.
///
/// Unlike the system this replaces — where a falsy check made an explicit
/// empty string indistinguishable from "not provided" — an empty string here
/// is a present value and is applied as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPatch {
    /// New task name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New due date.
    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
    /// New status. Takes precedence over `completed` when both are present.
    pub status: Option<TaskStatus>,
    /// New completed flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.completed.is_none()
    }
}

impl Task {
    /// Applies a patch, returning the updated task.
    ///
    /// Pure: `(task, patch, now) -> task`. Only fields present in the patch
    /// change; `updated_at` always moves to `now`. The status/completed
    /// reconciliation follows the module-level rule.
    #[must_use]
    pub fn apply_patch(&self, patch: &TaskPatch, now: Timestamp) -> Self {
        let mut updated = self.clone();

        if let Some(name) = &patch.name {
            updated.name = name.clone();
        }
        if let Some(description) = &patch.description {
            updated.description = Some(description.clone());
        }
        if let Some(priority) = patch.priority {
            updated.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            updated.due_date = Some(due_date);
        }

        if let Some(status) = patch.status {
            updated.status = status;
            updated.completed = status.is_completed();
        } else if let Some(completed) = patch.completed {
            updated.completed = completed;
            updated.status = if completed {
                TaskStatus::Completed
            } else {
                TaskStatus::Pending
            };
        }

        updated.updated_at = now;
        updated
    }
}
