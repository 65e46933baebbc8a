//! Repository traits and their Postgres / in-memory implementations.
//!
//! Handlers depend only on the [`TaskRepository`] and [`UserRepository`]
//! traits; `main` wires in the Postgres implementations, the test suites
//! wire in the in-memory ones. Both orderings and both error surfaces are
//! identical so the suites exercise the same contracts production runs.

mod task_repository;
mod user_repository;

use thiserror::Error;

pub use task_repository::{InMemoryTaskRepository, PostgresTaskRepository, TaskRepository};
pub use user_repository::{InMemoryUserRepository, PostgresUserRepository, UserRepository};

/// Errors surfaced by repositories.
///
/// Store failures deliberately collapse to a single opaque variant: handlers
/// surface them as a generic internal error, single attempt, no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The store failed or returned something unexpected.
    #[error("Database error: {0}")]
    Database(String),
    /// The email is already registered (unique constraint on users.email).
    #[error("Email already registered")]
    DuplicateEmail,
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(database_error) = &error {
            if database_error.is_unique_violation() {
                return Self::DuplicateEmail;
            }
        }
        Self::Database(error.to_string())
    }
}
