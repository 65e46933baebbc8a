//! User persistence.
//!
//! The task subsystem treats users as read-mostly identity records: they are
//! created by registration, looked up by the auth handlers and the admin
//! joins, and never deleted.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::user::{Role, User};
use crate::domain::value_objects::{Timestamp, UserId};

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// Fails with [`RepositoryError::DuplicateEmail`] when the email is
    /// already registered.
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;

    /// Looks a user up by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Looks a user up by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// All users whose id appears in `ids`.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, RepositoryError>;

    /// All users, oldest first.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}

// =============================================================================
// Postgres implementation
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct UserRecord {
    id: Uuid,
    name: String,
    email: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

const fn role_to_str(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Admin => "admin",
    }
}

fn role_from_str(value: &str) -> Result<Role, RepositoryError> {
    match value {
        "user" => Ok(Role::User),
        "admin" => Ok(Role::Admin),
        other => Err(RepositoryError::Database(format!(
            "unknown role value: {other}"
        ))),
    }
}

impl TryFrom<UserRecord> for User {
    type Error = RepositoryError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::from(record.id),
            name: record.name,
            email: record.email,
            role: role_from_str(&record.role)?,
            password_hash: record.password_hash,
            created_at: Timestamp::from_datetime(record.created_at),
        })
    }
}

/// User repository backed by Postgres.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository over the given connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, role, password_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id.as_uuid())
        .bind(&user.name)
        .bind(&user.email)
        .bind(role_to_str(user.role))
        .bind(&user.password_hash)
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let record: Option<UserRecord> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        record.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let record: Option<UserRecord> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        record.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, RepositoryError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let records: Vec<UserRecord> = sqlx::query_as("SELECT * FROM users WHERE id = ANY($1)")
            .bind(&uuids)
            .fetch_all(&self.pool)
            .await?;

        records.into_iter().map(User::try_from).collect()
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let records: Vec<UserRecord> =
            sqlx::query_as("SELECT * FROM users ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;

        records.into_iter().map(User::try_from).collect()
    }
}

// =============================================================================
// In-memory implementation
// =============================================================================

/// User repository backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::DuplicateEmail);
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        users.sort_by(|left, right| {
            left.created_at
                .cmp(&right.created_at)
                .then_with(|| left.id.cmp(&right.id))
        });
        Ok(users)
    }
}
