//! SimulateDecisionHandler - runs scenario generation for a decision.
//!
//! Flow: validate request, mark the decision `simulating`, generate,
//! replace the stored scenario set, mark `completed`. If persisting the
//! result fails the decision returns to `draft` and the previous scenario
//! set stays in place.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::domain::scenario::{sort_by_rank, Scenario, SimulationRequest};
use crate::ports::{DecisionRepository, ScenarioGenerator, ScenarioRepository};

use super::{load_owned, DecisionView};

/// Command to simulate a decision. Bounds are checked by the handler.
#[derive(Debug, Clone)]
pub struct SimulateDecisionCommand {
    pub decision_id: DecisionId,
    pub user_id: UserId,
    pub num_scenarios: i64,
    pub time_horizon_years: i64,
}

pub struct SimulateDecisionHandler {
    decisions: Arc<dyn DecisionRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
    generator: Arc<dyn ScenarioGenerator>,
}

impl SimulateDecisionHandler {
    pub fn new(
        decisions: Arc<dyn DecisionRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
        generator: Arc<dyn ScenarioGenerator>,
    ) -> Self {
        Self {
            decisions,
            scenarios,
            generator,
        }
    }

    pub async fn handle(&self, cmd: SimulateDecisionCommand) -> Result<DecisionView, DecisionError> {
        let request = SimulationRequest::new(cmd.num_scenarios, cmd.time_horizon_years)
            .map_err(DomainError::from)?;

        let mut decision =
            load_owned(self.decisions.as_ref(), cmd.decision_id, &cmd.user_id).await?;

        decision.begin_simulation()?;
        self.decisions.update(&decision).await?;

        tracing::info!(
            decision_id = %decision.id(),
            num_scenarios = request.num_scenarios(),
            horizon_years = request.time_horizon_years(),
            strategy = %self.generator.name(),
            "Simulation started"
        );

        let drafts = self.generator.generate(&decision, &request).await;
        let mut scenarios: Vec<Scenario> = drafts
            .into_iter()
            .map(|draft| Scenario::from_draft(*decision.id(), draft))
            .collect();
        sort_by_rank(&mut scenarios);

        if let Err(err) = self
            .scenarios
            .replace_for_decision(decision.id(), &scenarios)
            .await
        {
            tracing::error!(decision_id = %decision.id(), error = %err, "Failed to store scenarios");
            self.revert(&mut decision).await;
            return Err(DecisionError::infrastructure(err.message));
        }

        decision.complete_simulation()?;
        if let Err(err) = self.decisions.update(&decision).await {
            tracing::error!(decision_id = %decision.id(), error = %err, "Failed to complete simulation");
            self.revert(&mut decision).await;
            return Err(DecisionError::infrastructure(err.message));
        }

        tracing::info!(
            decision_id = %decision.id(),
            scenarios = scenarios.len(),
            "Simulation completed"
        );

        Ok(DecisionView {
            decision,
            scenarios,
        })
    }

    /// Best-effort return to draft after a failed run.
    async fn revert(&self, decision: &mut Decision) {
        decision.revert_to_draft();
        match self.decisions.update(decision).await {
            Ok(()) => tracing::warn!(decision_id = %decision.id(), "Simulation reverted to draft"),
            Err(err) => tracing::error!(
                decision_id = %decision.id(),
                error = %err,
                "Failed to revert decision to draft"
            ),
        }
    }
}
