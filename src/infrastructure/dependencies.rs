//! Dependency injection container.
//!
//! `AppDependencies` holds everything a handler needs: the repositories
//! behind trait objects (so production wires Postgres and the test suites
//! wire the in-memory implementations) plus the token service. The container
//! is the axum router state; it is `Clone` and cheap to clone.

use std::sync::Arc;

use super::config::AppConfig;
use super::repositories::{TaskRepository, UserRepository};
use crate::application::services::TokenService;

/// Application dependency container.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
    tokens: TokenService,
}

impl AppDependencies {
    /// Creates a new container.
    ///
    /// The token service is derived from the configuration's secret and
    /// token lifetime.
    #[must_use]
    pub fn new(
        config: AppConfig,
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_seconds);
        Self {
            config,
            tasks,
            users,
            tokens,
        }
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the task repository.
    #[must_use]
    pub fn tasks(&self) -> &Arc<dyn TaskRepository> {
        &self.tasks
    }

    /// Returns a reference to the user repository.
    #[must_use]
    pub fn users(&self) -> &Arc<dyn UserRepository> {
        &self.users
    }

    /// Returns a reference to the token service.
    #[must_use]
    pub const fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
