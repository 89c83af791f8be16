//! Session validation port for bearer token validation.
//!
//! HTTP middleware uses this port to turn an `Authorization: Bearer` header
//! into an `AuthenticatedUser`.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature, issuer and expiry
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    struct FixedValidator(AuthenticatedUser);

    #[async_trait]
    impl SessionValidator for FixedValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            if token == "good" {
                Ok(self.0.clone())
            } else {
                Err(AuthError::InvalidToken)
            }
        }
    }

    #[tokio::test]
    async fn trait_object_validates_through_dyn() {
        let user = AuthenticatedUser::new(UserId::new(), "a@b.io", None);
        let validator: Box<dyn SessionValidator> = Box::new(FixedValidator(user.clone()));

        assert_eq!(validator.validate("good").await, Ok(user));
        assert_eq!(validator.validate("bad").await, Err(AuthError::InvalidToken));
    }
}
