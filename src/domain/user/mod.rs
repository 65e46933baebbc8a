//! The User identity entity.
//!
//! Users are the authentication/identity side of the system: tasks reference
//! them as `owner` and `assigned_by`, and the task subsystem never deletes
//! them. The password is stored only as an Argon2id PHC hash string; the
//! plain-text password exists solely inside the register/login handlers.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Timestamp, UserId};

/// User capability level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user: may manage only their own tasks.
    #[default]
    User,
    /// Administrator: may additionally assign tasks to any user and view
    /// aggregate per-user progress.
    Admin,
}

impl Role {
    /// Whether this role grants admin capability.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across users.
    pub email: String,
    /// Capability level.
    pub role: Role,
    /// Argon2id PHC string. Never serialized into API responses; the DTO
    /// layer exposes only id/name/email/role.
    pub password_hash: String,
    /// Set once at registration.
    pub created_at: Timestamp,
}

impl User {
    /// Creates a new user record from registration data.
    pub fn register(
        name: String,
        email: String,
        role: Role,
        password_hash: String,
        now: Timestamp,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email,
            role,
            password_hash,
            created_at: now,
        }
    }
}
