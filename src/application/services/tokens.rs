//! JWT issuing and verification.
//!
//! The authentication gate is stateless: every protected request carries a
//! signed token in the `x-auth-token` header, and the decoded claims are the
//! caller's identity for the duration of that request. Tokens are HS256,
//! signed with a shared secret from configuration.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::{Role, User};
use crate::domain::value_objects::{Timestamp, UserId};

/// Token errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is missing a signature, expired, tampered with, or
    /// otherwise undecodable.
    #[error("Token is not valid")]
    Invalid,
    /// Signing failed. Should not happen with a well-formed secret.
    #[error("Failed to sign token")]
    Signing,
}

/// The identity carried inside a token.
///
/// `sub` is the user id; `role` and `email` ride along so the authorization
/// gate and log lines need no user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: UserId,
    /// The user's display name.
    pub name: String,
    /// The user's email.
    pub email: String,
    /// The user's capability level.
    pub role: Role,
    /// Expiry as a unix timestamp, validated on decode.
    pub exp: i64,
}

/// Issues and verifies the bearer tokens used by the authentication gate.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    time_to_live_seconds: i64,
}

impl TokenService {
    /// Creates a `TokenService` from a shared secret and a token lifetime.
    #[must_use]
    pub fn new(secret: &str, time_to_live_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            time_to_live_seconds,
        }
    }

    /// Issues a signed token for `user`, expiring `time_to_live_seconds`
    /// after `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if encoding fails.
    pub fn issue(&self, user: &User, now: Timestamp) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            exp: now.as_datetime().timestamp() + self.time_to_live_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|_| TokenError::Signing)
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for anything that does not verify:
    /// bad signature, expired `exp`, or a malformed token string.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}
