//! User account aggregate.

use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Maximum accepted password length, in characters.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// A registered account.
///
/// The password is only ever held as an opaque hash produced by the
/// `PasswordHasher` port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    password_hash: String,
    full_name: Option<String>,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Create a new active account.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the email is malformed
    pub fn new(
        id: UserId,
        email: &str,
        password_hash: String,
        full_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let email = normalize_email(email)?;
        let full_name = full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let now = Timestamp::now();
        Ok(Self {
            id,
            email,
            password_hash,
            full_name,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an account from persistence.
    pub fn reconstitute(
        id: UserId,
        email: String,
        password_hash: String,
        full_name: Option<String>,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            full_name,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Timestamp::now();
    }
}

/// Lowercases and trims an email, rejecting obviously malformed input.
pub fn normalize_email(raw: &str) -> Result<String, DomainError> {
    let email = raw.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid || email.chars().any(char::is_whitespace) {
        return Err(DomainError::validation("email", "Invalid email address"));
    }
    Ok(email)
}

/// Checks password length bounds before hashing.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
        return Err(DomainError::validation(
            "password",
            format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ),
        ));
    }
    Ok(())
}
