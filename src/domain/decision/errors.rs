//! Decision-specific error types.

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};

/// Errors surfaced by decision commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Decision was not found, or belongs to someone else.
    NotFound(DecisionId),
    /// Requested status change is not a lifecycle edge.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Persistence or other infrastructure error.
    Infrastructure(String),
}

impl DecisionError {
    pub fn not_found(id: DecisionId) -> Self {
        DecisionError::NotFound(id)
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        DecisionError::InvalidState(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecisionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DecisionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotFound(_) => ErrorCode::DecisionNotFound,
            DecisionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            DecisionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DecisionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DecisionError::NotFound(_) => "Decision not found".to_string(),
            DecisionError::InvalidState(msg) => format!("Invalid state: {}", msg),
            DecisionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DecisionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DecisionError {}

impl From<DomainError> for DecisionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => DecisionError::InvalidState(err.message),
            ErrorCode::ValidationFailed => DecisionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => DecisionError::Infrastructure(err.to_string()),
        }
    }
}
