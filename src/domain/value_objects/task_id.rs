//! Task ID value object.
//!
//! Provides a strongly-typed identifier for tasks using UUID v7 format.
//! UUID v7 is time-ordered, which is beneficial for database indexing and
//! keeps newest-first listings stable when tasks share a creation timestamp.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation error for identifier value objects.
///
/// Shared by [`TaskId`](crate::domain::value_objects::TaskId) and
/// [`UserId`](crate::domain::value_objects::UserId), both of which reject
/// anything that is not a well-formed UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid UUID format: {0}")]
pub struct InvalidIdError(pub String);

/// A unique identifier for a task.
///
/// `TaskId` uses UUID v7 format and provides:
///
/// - **Type safety**: Prevents accidental mixing with user identifiers
/// - **Smart constructor**: [`TaskId::parse`] validates input before construction
/// - **Time ordering**: UUID v7 is chronologically sortable
///
/// # Examples
///
/// ```rust
/// use taskboard::domain::value_objects::TaskId;
///
/// let id = TaskId::generate();
/// let parsed = TaskId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Parses a `TaskId` from its string representation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdError`] if the string is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, InvalidIdError> {
        Uuid::from_str(value)
            .map(Self)
            .map_err(|_| InvalidIdError(value.to_string()))
    }

    /// Generates a new time-ordered `TaskId`.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for TaskId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
