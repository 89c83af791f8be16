//! Password hashing port.

use crate::domain::foundation::AuthError;

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing encoded string.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for unreadable
    /// hashes or hasher failures.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
