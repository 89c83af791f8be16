//! Access token issuing port.

use crate::domain::foundation::AuthError;
use crate::domain::user::User;

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}

/// Issues bearer tokens that the `SessionValidator` port accepts.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<IssuedToken, AuthError>;
}
