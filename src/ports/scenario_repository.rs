//! Scenario repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::scenario::Scenario;

/// Persistence for the scenario set of each decision.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Replace every scenario of the decision with `scenarios`.
    ///
    /// Implementations must apply this as one unit: on error the previous
    /// set is still in place.
    async fn replace_for_decision(
        &self,
        decision_id: &DecisionId,
        scenarios: &[Scenario],
    ) -> Result<(), DomainError>;

    /// All scenarios of the decision ordered by rank.
    async fn find_by_decision(&self, decision_id: &DecisionId)
        -> Result<Vec<Scenario>, DomainError>;

    /// Remove every scenario of the decision.
    async fn delete_for_decision(&self, decision_id: &DecisionId) -> Result<(), DomainError>;
}
