//! User listing.

use axum::Json;
use axum::extract::State;

use crate::api::dto::responses::UserResponse;
use crate::api::dto::transformers::user_to_response;
use crate::api::middleware::CurrentUser;
use crate::api::middleware::error_handler::{ApiErrorResponse, repository_error_to_response};
use crate::infrastructure::AppDependencies;

/// GET /api/users - All users, for the assignment picker.
///
/// Requires authentication but not admin capability; responses carry no
/// credential material.
pub async fn list_users(
    State(dependencies): State<AppDependencies>,
    _current_user: CurrentUser,
) -> Result<Json<Vec<UserResponse>>, ApiErrorResponse> {
    let users = dependencies
        .users()
        .list()
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    Ok(Json(users.iter().map(user_to_response).collect()))
}
