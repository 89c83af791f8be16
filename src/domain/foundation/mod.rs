//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps, error types and the state machine trait used
//! by the user, decision and scenario modules.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DecisionId, ScenarioId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
