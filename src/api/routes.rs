//! Route configuration.
//!
//! | Method | Path | Handler | Gate |
//! |--------|------|---------|------|
//! | POST | /api/auth/register | `auth::register` | — |
//! | POST | /api/auth/login | `auth::login` | — |
//! | POST | /api/tasks | `task::create_task` | auth |
//! | GET | /api/tasks | `task::list_tasks` | auth |
//! | PUT | /api/tasks/{id} | `task::update_task` | auth + owner |
//! | DELETE | /api/tasks/{id} | `task::delete_task` | auth + owner |
//! | GET | /api/users | `users::list_users` | auth |
//! | POST | /api/admin/assign-task | `admin::assign_task` | auth + admin |
//! | GET | /api/admin/assigned-tasks | `admin::list_assigned_tasks` | auth + admin |
//! | GET | /api/admin/user-progress | `admin::user_progress` | auth + admin |
//! | GET | /health | `health_check` | — |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{admin, auth, task, users};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes and middleware.
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // Auth routes (public)
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Task routes (owner-scoped)
        .route("/api/tasks", post(task::create_task).get(task::list_tasks))
        .route(
            "/api/tasks/{id}",
            put(task::update_task).delete(task::delete_task),
        )
        // User listing
        .route("/api/users", get(users::list_users))
        // Admin routes
        .route("/api/admin/assign-task", post(admin::assign_task))
        .route("/api/admin/assigned-tasks", get(admin::list_assigned_tasks))
        .route("/api/admin/user-progress", get(admin::user_progress))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(dependencies)
}

/// Creates the CORS layer.
///
/// Wide open, as the original deployment was; restrict origins when fronting
/// this with anything other than the bundled client.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
