//! Persisted scenario entity.

use crate::domain::foundation::{DecisionId, ScenarioId, Timestamp};

use super::{Outcomes, RiskFactor, ScenarioDraft, TimelineEntry};

/// A scenario attached to a decision.
///
/// Scenarios are never edited. Each simulation run deletes the previous
/// set for the decision and inserts a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    id: ScenarioId,
    decision_id: DecisionId,
    title: String,
    description: String,
    probability: f64,
    timeline: Vec<TimelineEntry>,
    outcomes: Outcomes,
    risks: Vec<RiskFactor>,
    recommendations: String,
    rank: u32,
    created_at: Timestamp,
}

impl Scenario {
    /// Attaches a generated draft to a decision.
    pub fn from_draft(decision_id: DecisionId, draft: ScenarioDraft) -> Self {
        Self {
            id: ScenarioId::new(),
            decision_id,
            title: draft.title,
            description: draft.description,
            probability: draft.probability,
            timeline: draft.timeline,
            outcomes: draft.outcomes,
            risks: draft.risks,
            recommendations: draft.recommendations,
            rank: draft.rank,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a scenario from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ScenarioId,
        decision_id: DecisionId,
        title: String,
        description: String,
        probability: f64,
        timeline: Vec<TimelineEntry>,
        outcomes: Outcomes,
        risks: Vec<RiskFactor>,
        recommendations: String,
        rank: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            decision_id,
            title,
            description,
            probability,
            timeline,
            outcomes,
            risks,
            recommendations,
            rank,
            created_at,
        }
    }

    pub fn id(&self) -> &ScenarioId {
        &self.id
    }

    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn outcomes(&self) -> &Outcomes {
        &self.outcomes
    }

    pub fn risks(&self) -> &[RiskFactor] {
        &self.risks
    }

    pub fn recommendations(&self) -> &str {
        &self.recommendations
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Sorts scenarios into display order.
pub fn sort_by_rank(scenarios: &mut [Scenario]) {
    scenarios.sort_by_key(|s| s.rank());
}
