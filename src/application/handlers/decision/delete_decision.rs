//! DeleteDecisionHandler - removes a decision and its scenarios.

use std::sync::Arc;

use crate::domain::decision::DecisionError;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, ScenarioRepository};

use super::load_owned;

#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub decision_id: DecisionId,
    pub user_id: UserId,
}

pub struct DeleteDecisionHandler {
    decisions: Arc<dyn DecisionRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
    ) -> Self {
        Self {
            decisions,
            scenarios,
        }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DecisionError> {
        let decision = load_owned(self.decisions.as_ref(), cmd.decision_id, &cmd.user_id).await?;

        self.scenarios.delete_for_decision(decision.id()).await?;
        self.decisions.delete(decision.id()).await?;

        tracing::info!(decision_id = %decision.id(), "Decision deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::career_decision;
    use super::*;
    use crate::adapters::memory::{InMemoryDecisionRepository, InMemoryScenarioRepository};
    use crate::domain::scenario::{generate_mock_scenarios, Scenario, SimulationRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn removes_decision_and_scenarios() {
        let decisions = Arc::new(InMemoryDecisionRepository::new());
        let scenarios = Arc::new(InMemoryScenarioRepository::new());
        let owner = UserId::new();
        let decision = career_decision(owner);
        decisions.save(&decision).await.unwrap();

        let drafts = generate_mock_scenarios(
            decision.title(),
            decision.category(),
            &SimulationRequest::default(),
            &mut StdRng::seed_from_u64(1),
        );
        let stored: Vec<Scenario> = drafts
            .into_iter()
            .map(|d| Scenario::from_draft(*decision.id(), d))
            .collect();
        scenarios.replace_for_decision(decision.id(), &stored).await.unwrap();

        let handler = DeleteDecisionHandler::new(decisions.clone(), scenarios.clone());
        handler
            .handle(DeleteDecisionCommand {
                decision_id: *decision.id(),
                user_id: owner,
            })
            .await
            .unwrap();

        assert!(decisions.find_by_id(decision.id()).await.unwrap().is_none());
        assert!(scenarios.find_by_decision(decision.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_decision_is_not_found() {
        let handler = DeleteDecisionHandler::new(
            Arc::new(InMemoryDecisionRepository::new()),
            Arc::new(InMemoryScenarioRepository::new()),
        );
        let id = DecisionId::new();

        let err = handler
            .handle(DeleteDecisionCommand {
                decision_id: id,
                user_id: UserId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, DecisionError::NotFound(id));
    }
}
