//! Authentication gate.
//!
//! [`CurrentUser`] is an extractor: any handler that takes one is a
//! protected endpoint. The token travels in the `x-auth-token` header (the
//! header the existing client sends), is verified statelessly against the
//! shared secret, and the decoded claims become the caller's identity for
//! the request. No session store, no side effects beyond a trace line.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::error_handler::ApiErrorResponse;
use crate::application::services::Claims;
use crate::domain::user::Role;
use crate::domain::value_objects::UserId;
use crate::infrastructure::AppDependencies;

/// Name of the request header carrying the bearer token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// The authenticated caller, decoded from the request token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// The caller's user id.
    pub id: UserId,
    /// The caller's display name.
    pub name: String,
    /// The caller's email.
    pub email: String,
    /// The caller's capability level.
    pub role: Role,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl FromRequestParts<AppDependencies> for CurrentUser {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        dependencies: &AppDependencies,
    ) -> Result<Self, Self::Rejection> {
        let Some(header_value) = parts.headers.get(AUTH_HEADER) else {
            return Err(ApiErrorResponse::no_token());
        };

        let token = header_value
            .to_str()
            .map_err(|_| ApiErrorResponse::invalid_token())?;

        let claims = dependencies
            .tokens()
            .verify(token)
            .map_err(|_| ApiErrorResponse::invalid_token())?;

        tracing::debug!(user = %claims.sub, email = %claims.email, "authenticated request");

        Ok(claims.into())
    }
}
