//! Task persistence.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::task::{Priority, Task, TaskStatus};
use crate::domain::value_objects::{TaskId, Timestamp, UserId};

/// Persistence operations for tasks.
///
/// Listings are ordered newest-first (creation time descending, id as the
/// tie-breaker — ids are time-ordered, so the order is stable).
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    async fn insert(&self, task: &Task) -> Result<(), RepositoryError>;

    /// Looks a task up by id.
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError>;

    /// All tasks owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, RepositoryError>;

    /// All tasks assigned by `assigner`, newest first.
    async fn list_by_assigner(&self, assigner: &UserId) -> Result<Vec<Task>, RepositoryError>;

    /// Overwrites an existing task.
    async fn update(&self, task: &Task) -> Result<(), RepositoryError>;

    /// Permanently removes a task. Returns whether a task was removed.
    async fn delete(&self, id: &TaskId) -> Result<bool, RepositoryError>;
}

// =============================================================================
// Postgres implementation
// =============================================================================

/// Row shape of the `tasks` table.
///
/// Enums are stored as text and converted at the boundary; an unknown value
/// in the database is a [`RepositoryError::Database`], not a panic.
#[derive(Debug, sqlx::FromRow)]
struct TaskRecord {
    id: Uuid,
    name: String,
    description: Option<String>,
    priority: String,
    status: String,
    completed: bool,
    due_date: Option<NaiveDate>,
    owner: Uuid,
    assigned_by: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const fn priority_to_str(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

fn priority_from_str(value: &str) -> Result<Priority, RepositoryError> {
    match value {
        "High" => Ok(Priority::High),
        "Medium" => Ok(Priority::Medium),
        "Low" => Ok(Priority::Low),
        other => Err(RepositoryError::Database(format!(
            "unknown priority value: {other}"
        ))),
    }
}

const fn status_to_str(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "pending",
        TaskStatus::InProgress => "in-progress",
        TaskStatus::Completed => "completed",
    }
}

fn status_from_str(value: &str) -> Result<TaskStatus, RepositoryError> {
    match value {
        "pending" => Ok(TaskStatus::Pending),
        "in-progress" => Ok(TaskStatus::InProgress),
        "completed" => Ok(TaskStatus::Completed),
        other => Err(RepositoryError::Database(format!(
            "unknown status value: {other}"
        ))),
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = RepositoryError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TaskId::from(record.id),
            name: record.name,
            description: record.description,
            priority: priority_from_str(&record.priority)?,
            status: status_from_str(&record.status)?,
            completed: record.completed,
            due_date: record.due_date,
            owner: UserId::from(record.owner),
            assigned_by: record.assigned_by.map(UserId::from),
            created_at: Timestamp::from_datetime(record.created_at),
            updated_at: Timestamp::from_datetime(record.updated_at),
        })
    }
}

/// Task repository backed by Postgres.
///
/// Expects the schema from `migrations/`. All queries are single statements;
/// per-row atomicity is all the consistency this system asks of its store.
#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a repository over the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO tasks \
             (id, name, description, priority, status, completed, due_date, \
              owner, assigned_by, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(task.id.as_uuid())
        .bind(&task.name)
        .bind(&task.description)
        .bind(priority_to_str(task.priority))
        .bind(status_to_str(task.status))
        .bind(task.completed)
        .bind(task.due_date)
        .bind(task.owner.as_uuid())
        .bind(task.assigned_by.as_ref().map(UserId::as_uuid))
        .bind(task.created_at.as_datetime())
        .bind(task.updated_at.as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        let record: Option<TaskRecord> = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        record.map(Task::try_from).transpose()
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, RepositoryError> {
        let records: Vec<TaskRecord> = sqlx::query_as(
            "SELECT * FROM tasks WHERE owner = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(Task::try_from).collect()
    }

    async fn list_by_assigner(&self, assigner: &UserId) -> Result<Vec<Task>, RepositoryError> {
        let records: Vec<TaskRecord> = sqlx::query_as(
            "SELECT * FROM tasks WHERE assigned_by = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(assigner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        records.into_iter().map(Task::try_from).collect()
    }

    async fn update(&self, task: &Task) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE tasks SET \
             name = $2, description = $3, priority = $4, status = $5, \
             completed = $6, due_date = $7, updated_at = $8 \
             WHERE id = $1",
        )
        .bind(task.id.as_uuid())
        .bind(&task.name)
        .bind(&task.description)
        .bind(priority_to_str(task.priority))
        .bind(status_to_str(task.status))
        .bind(task.completed)
        .bind(task.due_date)
        .bind(task.updated_at.as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// In-memory implementation
// =============================================================================

/// Task repository backed by a `HashMap`.
///
/// Used by the test suites; behaves identically to the Postgres
/// implementation, including listing order.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_newest_first(mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| right.id.cmp(&left.id))
        });
        tasks
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> Result<(), RepositoryError> {
        self.tasks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(task.id, task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, RepositoryError> {
        Ok(self
            .tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, RepositoryError> {
        let tasks = self
            .tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|task| task.owner == *owner)
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(tasks))
    }

    async fn list_by_assigner(&self, assigner: &UserId) -> Result<Vec<Task>, RepositoryError> {
        let tasks = self
            .tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|task| task.assigned_by == Some(*assigner))
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(tasks))
    }

    async fn update(&self, task: &Task) -> Result<(), RepositoryError> {
        self.tasks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(task.id, task.clone());
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, RepositoryError> {
        Ok(self
            .tasks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some())
    }
}
