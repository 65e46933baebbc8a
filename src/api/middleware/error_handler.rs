//! API error types and conversions.
//!
//! Domain and repository errors are mapped to HTTP responses here, in pure
//! functions, so handlers stay a thin pipeline of
//! `extract → call → transform`. The JSON body always carries a
//! machine-readable `code` and the human-readable `message` the client
//! displays inline.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Code |
//! |-------|-------------|------|
//! | Missing token | 401 | `NO_TOKEN` |
//! | Invalid/expired token | 401 | `INVALID_TOKEN` |
//! | Authenticated but not admin | 403 | `ADMIN_ONLY` |
//! | Caller is not the task owner | 401 | `NOT_AUTHORIZED` |
//! | Unknown task id | 404 | `TASK_NOT_FOUND` |
//! | Malformed task id in path | 400 | `INVALID_TASK_ID` |
//! | Missing/blank required field | 422 | `VALIDATION_ERROR` |
//! | Email already registered | 409 | `EMAIL_TAKEN` |
//! | Bad login credentials | 401 | `INVALID_CREDENTIALS` |
//! | Store failure | 500 | `INTERNAL_ERROR` |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::task::DomainError;
use crate::infrastructure::RepositoryError;

/// API error body.
///
/// # Example JSON
///
/// ```json
/// {
///     "code": "TASK_NOT_FOUND",
///     "message": "Task not found"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message, shown inline by the client.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// An [`ApiError`] paired with its HTTP status code.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// 401 with the exact message the authentication gate emits for a
    /// missing credential.
    #[must_use]
    pub fn no_token() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiError::new("NO_TOKEN", "No token, authorization denied"),
        )
    }

    /// 401 for a credential that does not verify.
    #[must_use]
    pub fn invalid_token() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiError::new("INVALID_TOKEN", "Token is not valid"),
        )
    }

    /// 403 for an authenticated caller without admin capability.
    #[must_use]
    pub fn admin_only() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            ApiError::new("ADMIN_ONLY", "Access denied. Admin only."),
        )
    }

    /// 400 for a path parameter that is not a well-formed task id.
    #[must_use]
    pub fn invalid_task_id(value: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "INVALID_TASK_ID",
                "Invalid task id",
                serde_json::json!({ "id": value }),
            ),
        )
    }

    /// 401 for login with an unknown email or wrong password. One message
    /// for both, so the response does not reveal which failed.
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiError::new("INVALID_CREDENTIALS", "Invalid credentials"),
        )
    }

    /// 500 for store or unexpected failures. The body stays generic; the
    /// cause goes to the log, not to the client.
    #[must_use]
    pub fn internal_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("INTERNAL_ERROR", "Server Error"),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

// =============================================================================
// Error Conversion Functions (Pure)
// =============================================================================

/// Maps a domain error to its HTTP response.
#[must_use]
pub fn domain_error_to_response(error: &DomainError) -> ApiErrorResponse {
    match error {
        DomainError::TaskNotFound(_) => ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::new("TASK_NOT_FOUND", error.to_string()),
        ),
        DomainError::NotOwner(_) => ApiErrorResponse::new(
            StatusCode::UNAUTHORIZED,
            ApiError::new("NOT_AUTHORIZED", error.to_string()),
        ),
        DomainError::MissingField(_) => ApiErrorResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::new("VALIDATION_ERROR", error.to_string()),
        ),
    }
}

/// Maps a repository error to its HTTP response, logging store failures.
#[must_use]
pub fn repository_error_to_response(error: &RepositoryError) -> ApiErrorResponse {
    match error {
        RepositoryError::Database(message) => {
            tracing::error!(error = %message, "repository failure");
            ApiErrorResponse::internal_error()
        }
        RepositoryError::DuplicateEmail => ApiErrorResponse::new(
            StatusCode::CONFLICT,
            ApiError::new("EMAIL_TAKEN", error.to_string()),
        ),
    }
}
