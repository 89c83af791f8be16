//! User-specific error types.

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};

/// Errors surfaced by registration, login and profile lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Another account already uses this email.
    EmailTaken,
    /// Login failed; which half was wrong is not disclosed.
    InvalidCredentials,
    /// The account exists but has been deactivated.
    Inactive,
    /// The authenticated account no longer exists.
    NotFound,
    ValidationFailed { field: String, message: String },
    Infrastructure(String),
}

impl UserError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        UserError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        UserError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::EmailTaken => ErrorCode::Conflict,
            UserError::InvalidCredentials | UserError::Inactive => ErrorCode::Unauthorized,
            UserError::NotFound => ErrorCode::UserNotFound,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            UserError::EmailTaken => "Email already registered".to_string(),
            UserError::InvalidCredentials => "Incorrect email or password".to_string(),
            UserError::Inactive => "Inactive user".to_string(),
            UserError::NotFound => "User not found".to_string(),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => UserError::EmailTaken,
            ErrorCode::UserNotFound => UserError::NotFound,
            ErrorCode::ValidationFailed => UserError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}

impl From<AuthError> for UserError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => UserError::InvalidCredentials,
            AuthError::UserNotFound => UserError::NotFound,
            other => UserError::Infrastructure(other.to_string()),
        }
    }
}
