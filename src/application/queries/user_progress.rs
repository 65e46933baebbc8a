//! Per-assignee progress aggregation.
//!
//! Groups the tasks an admin has assigned by owner and counts them by
//! status. The original system expressed this as a store-side aggregation
//! pipeline; here it is an explicit in-memory reduction so the counting
//! contract holds for any store:
//!
//! - `total == completed + pending + in_progress` for every row, and
//! - the sum of `total` over all rows equals the number of tasks passed in
//!   whose owner appears in the user set.
//!
//! Owners with no matching user record are dropped, mirroring the inner
//! join (`$lookup` + `$unwind`) of the original pipeline.

use std::collections::BTreeMap;

use crate::domain::task::{Task, TaskStatus};
use crate::domain::user::User;
use crate::domain::value_objects::UserId;

/// Task counts for a single assignee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressCounts {
    /// All tasks assigned to this owner by the requesting admin.
    pub total: u64,
    /// Tasks with status `completed`.
    pub completed: u64,
    /// Tasks with status `pending`.
    pub pending: u64,
    /// Tasks with status `in-progress`.
    pub in_progress: u64,
}

impl ProgressCounts {
    fn record(&mut self, status: TaskStatus) {
        self.total += 1;
        match status {
            TaskStatus::Completed => self.completed += 1,
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::InProgress => self.in_progress += 1,
        }
    }
}

/// One aggregation row: an assignee joined with their task counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProgress {
    /// The assignee's id.
    pub user_id: UserId,
    /// The assignee's display name.
    pub name: String,
    /// The assignee's email.
    pub email: String,
    /// Status breakdown of their assigned tasks.
    pub counts: ProgressCounts,
}

/// Groups `tasks` by owner and joins each group with its user record.
///
/// `tasks` is expected to be pre-filtered to one assigner; this function
/// only groups and counts. Rows come back ordered by owner id, which for
/// time-ordered ids means registration order.
#[must_use]
pub fn summarize_progress(tasks: &[Task], users: &[User]) -> Vec<UserProgress> {
    let mut counts_by_owner: BTreeMap<UserId, ProgressCounts> = BTreeMap::new();

    for task in tasks {
        counts_by_owner.entry(task.owner).or_default().record(task.status);
    }

    counts_by_owner
        .into_iter()
        .filter_map(|(owner, counts)| {
            users.iter().find(|user| user.id == owner).map(|user| UserProgress {
                user_id: owner,
                name: user.name.clone(),
                email: user.email.clone(),
                counts,
            })
        })
        .collect()
}
