//! User ID value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task_id::InvalidIdError;

/// A unique identifier for a user.
///
/// Users are referenced by tasks as `owner` and `assigned_by`; the identity
/// records themselves live in the user collection. Like
/// [`TaskId`](super::TaskId), this is a UUID v7 newtype with a validating
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parses a `UserId` from its string representation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdError`] if the string is not a valid UUID.
    pub fn parse(value: &str) -> Result<Self, InvalidIdError> {
        Uuid::from_str(value)
            .map(Self)
            .map_err(|_| InvalidIdError(value.to_string()))
    }

    /// Generates a new time-ordered `UserId`.
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

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
