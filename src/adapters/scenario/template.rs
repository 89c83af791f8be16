//! Template-backed scenario strategy.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

use crate::domain::decision::Decision;
use crate::domain::scenario::{generate_mock_scenarios, ScenarioDraft, SimulationRequest};
use crate::ports::ScenarioGenerator;

/// Synthesizes scenarios from the fixed archetype catalog.
///
/// Used directly when no model is configured, and as the fallback of
/// [`super::LlmScenarioGenerator`].
#[derive(Debug)]
pub struct TemplateScenarioGenerator {
    rng: Mutex<StdRng>,
}

impl TemplateScenarioGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible time-investment draws.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Synchronous core shared with the LLM strategy's fallback path.
    pub fn synthesize(&self, decision: &Decision, request: &SimulationRequest) -> Vec<ScenarioDraft> {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        generate_mock_scenarios(decision.title(), decision.category(), request, &mut *rng)
    }
}

impl Default for TemplateScenarioGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScenarioGenerator for TemplateScenarioGenerator {
    async fn generate(
        &self,
        decision: &Decision,
        request: &SimulationRequest,
    ) -> Vec<ScenarioDraft> {
        self.synthesize(decision, request)
    }

    fn name(&self) -> &str {
        "template"
    }
}
