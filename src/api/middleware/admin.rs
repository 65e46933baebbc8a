//! Authorization gate for admin-only routes.
//!
//! Runs after the authentication gate: extracting an [`AdminUser`] first
//! extracts a [`CurrentUser`], then checks the role. A pure predicate; the
//! only side effect is the log line.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::CurrentUser;
use super::error_handler::ApiErrorResponse;
use crate::infrastructure::AppDependencies;

/// An authenticated caller with admin capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser(pub CurrentUser);

impl FromRequestParts<AppDependencies> for AdminUser {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        dependencies: &AppDependencies,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentUser::from_request_parts(parts, dependencies).await?;

        if current.role.is_admin() {
            tracing::debug!(email = %current.email, "admin access granted");
            Ok(Self(current))
        } else {
            tracing::warn!(email = %current.email, role = ?current.role, "admin access denied");
            Err(ApiErrorResponse::admin_only())
        }
    }
}
