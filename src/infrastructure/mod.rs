//! Infrastructure layer: configuration, persistence, dependency wiring.

pub mod config;
pub mod dependencies;
pub mod repositories;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use repositories::{
    InMemoryTaskRepository, InMemoryUserRepository, PostgresTaskRepository,
    PostgresUserRepository, RepositoryError, TaskRepository, UserRepository,
};
