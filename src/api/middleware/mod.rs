//! Request gates and error handling for the API layer.

pub mod admin;
pub mod auth;
pub mod error_handler;

pub use admin::AdminUser;
pub use auth::{AUTH_HEADER, CurrentUser};
pub use error_handler::{
    ApiError, ApiErrorResponse, domain_error_to_response, repository_error_to_response,
};
