//! Decision command and query handlers.

mod create_decision;
mod delete_decision;
mod get_decision;
mod list_decisions;
mod simulate_decision;
mod update_decision;

pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use get_decision::{DecisionView, GetDecisionHandler, GetDecisionQuery};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery, MAX_PAGE_SIZE};
pub use simulate_decision::{SimulateDecisionCommand, SimulateDecisionHandler};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Loads a decision the caller owns; foreign and missing decisions are
/// both `NotFound`.
async fn load_owned(
    repository: &dyn DecisionRepository,
    decision_id: DecisionId,
    user_id: &UserId,
) -> Result<Decision, DecisionError> {
    match repository.find_by_id(&decision_id).await? {
        Some(decision) if decision.is_owner(user_id) => Ok(decision),
        _ => Err(DecisionError::not_found(decision_id)),
    }
}
