//! Caller identity and the ways establishing it can fail.

use super::UserId;
use thiserror::Error;

/// Caller identity extracted from a validated access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>, full_name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            full_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Bad signature, wrong issuer or not a JWT at all.
    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Email/password pair did not match an account.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Token subject has no active account.
    #[error("User not found")]
    UserNotFound,

    /// Signing or hashing failed; not the caller's fault.
    #[error("authentication backend failed: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
