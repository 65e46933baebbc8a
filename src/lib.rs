//! Taskboard — a task-management API.
//!
//! Authenticated users create, view, update, and delete their own tasks;
//! administrators assign tasks to users and view aggregate per-user
//! progress. Requests carry a signed token in the `x-auth-token` header;
//! tasks live in Postgres behind repository traits.
//!
//! # Architecture
//!
//! - **Domain layer**: entities, value objects, and the pure
//!   status/completed reconciliation rule
//! - **Application layer**: token and password services, progress
//!   aggregation
//! - **Infrastructure layer**: configuration, repositories, dependency
//!   wiring
//! - **API layer**: axum routes, handlers, DTOs, auth gates

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
