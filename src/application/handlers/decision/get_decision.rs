//! GetDecisionHandler - Query handler for a decision with its scenarios.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::domain::scenario::Scenario;
use crate::ports::{DecisionRepository, ScenarioRepository};

use super::load_owned;

#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub decision_id: DecisionId,
    pub user_id: UserId,
}

/// A decision together with its current scenario set, ordered by rank.
#[derive(Debug, Clone)]
pub struct DecisionView {
    pub decision: Decision,
    pub scenarios: Vec<Scenario>,
}

pub struct GetDecisionHandler {
    decisions: Arc<dyn DecisionRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
}

impl GetDecisionHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
    ) -> Self {
        Self {
            decisions,
            scenarios,
        }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<DecisionView, DecisionError> {
        let decision = load_owned(self.decisions.as_ref(), query.decision_id, &query.user_id).await?;
        let scenarios = self.scenarios.find_by_decision(decision.id()).await?;
        Ok(DecisionView {
            decision,
            scenarios,
        })
    }
}
