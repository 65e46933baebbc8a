//! Registration and login.
//!
//! These are the endpoints that mint the tokens the authentication gate
//! verifies. Passwords exist in plain text only inside these handlers; what
//! is stored is an Argon2id hash, and what is returned is a signed token
//! plus the credential-free user representation.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::requests::{LoginRequest, RegisterRequest};
use crate::api::dto::responses::AuthResponse;
use crate::api::dto::transformers::user_to_response;
use crate::api::middleware::error_handler::{
    ApiError, ApiErrorResponse, repository_error_to_response,
};
use crate::application::services::{hash_password, verify_password};
use crate::domain::user::User;
use crate::domain::value_objects::Timestamp;
use crate::infrastructure::AppDependencies;

/// POST /api/auth/register - Create a user and sign them in.
///
/// # Response
///
/// - `201 Created` - Token and user
/// - `409 Conflict` - Email already registered
/// - `422 Unprocessable Entity` - Blank name, email, or password
pub async fn register(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiErrorResponse> {
    require_non_blank("name", &request.name)?;
    require_non_blank("email", &request.email)?;
    require_non_blank("password", &request.password)?;

    let password_hash = hash_password(&request.password).map_err(|error| {
        tracing::error!(error = %error, "password hashing failed");
        ApiErrorResponse::internal_error()
    })?;

    let user = User::register(
        request.name,
        request.email,
        request.role.unwrap_or_default(),
        password_hash,
        Timestamp::now(),
    );

    dependencies
        .users()
        .insert(&user)
        .await
        .map_err(|error| repository_error_to_response(&error))?;

    tracing::info!(user = %user.id, email = %user.email, "user registered");

    let token = issue_token(&dependencies, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user_to_response(&user),
        }),
    ))
}

/// POST /api/auth/login - Exchange credentials for a token.
///
/// Unknown email and wrong password produce the same 401, so the response
/// does not reveal whether the email is registered.
pub async fn login(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiErrorResponse> {
    let user = dependencies
        .users()
        .find_by_email(&request.email)
        .await
        .map_err(|error| repository_error_to_response(&error))?
        .ok_or_else(ApiErrorResponse::invalid_credentials)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(ApiErrorResponse::invalid_credentials());
    }

    tracing::info!(user = %user.id, "login succeeded");

    let token = issue_token(&dependencies, &user)?;

    Ok(Json(AuthResponse {
        token,
        user: user_to_response(&user),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn require_non_blank(field: &'static str, value: &str) -> Result<(), ApiErrorResponse> {
    if value.trim().is_empty() {
        return Err(ApiErrorResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new("VALIDATION_ERROR", format!("{field} is required")),
        ));
    }
    Ok(())
}

fn issue_token(
    dependencies: &AppDependencies,
    user: &User,
) -> Result<String, ApiErrorResponse> {
    dependencies
        .tokens()
        .issue(user, Timestamp::now())
        .map_err(|error| {
            tracing::error!(error = %error, "token signing failed");
            ApiErrorResponse::internal_error()
        })
}
