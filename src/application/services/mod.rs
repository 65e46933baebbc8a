//! Application services: credentials and tokens.

pub mod passwords;
pub mod tokens;

pub use passwords::{PasswordHashError, hash_password, verify_password};
pub use tokens::{Claims, TokenError, TokenService};
