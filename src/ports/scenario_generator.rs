//! Scenario generation port.
//!
//! One interface, two strategies: the template generator and the
//! LLM-backed generator that falls back to templates. Generation never
//! fails from the caller's point of view; strategies absorb their own
//! errors and always return a ranked list.

use async_trait::async_trait;

use crate::domain::decision::Decision;
use crate::domain::scenario::{ScenarioDraft, SimulationRequest};

#[async_trait]
pub trait ScenarioGenerator: Send + Sync {
    /// Produce ranked scenarios for the decision.
    async fn generate(&self, decision: &Decision, request: &SimulationRequest)
        -> Vec<ScenarioDraft>;

    /// Short strategy name for logs ("template", "openai", ...).
    fn name(&self) -> &str;
}
