//! Model-backed scenario strategy with template fallback.

use async_trait::async_trait;
use std::sync::Arc;

use super::TemplateScenarioGenerator;
use crate::domain::decision::Decision;
use crate::domain::scenario::{
    build_scenario_prompt, parse_scenarios, ScenarioDraft, SimulationRequest,
    SCENARIO_SYSTEM_PROMPT,
};
use crate::ports::{AIProvider, CompletionRequest, RequestMetadata, Sampling, ScenarioGenerator};

/// Asks an external model for scenarios and parses its reply.
///
/// A provider error or a reply with no usable JSON object falls back to
/// the template strategy. One call per generation, no retries.
pub struct LlmScenarioGenerator {
    provider: Arc<dyn AIProvider>,
    fallback: TemplateScenarioGenerator,
    name: String,
    sampling: Sampling,
}

impl LlmScenarioGenerator {
    pub fn new(provider: Arc<dyn AIProvider>, temperature: f32, max_tokens: u32) -> Self {
        let name = provider.provider_info().name;
        Self {
            provider,
            fallback: TemplateScenarioGenerator::new(),
            name,
            sampling: Sampling::new(temperature, max_tokens),
        }
    }

    pub fn with_fallback(mut self, fallback: TemplateScenarioGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    fn completion_request(
        &self,
        decision: &Decision,
        request: &SimulationRequest,
    ) -> CompletionRequest {
        CompletionRequest::new(
            SCENARIO_SYSTEM_PROMPT,
            build_scenario_prompt(decision, request),
            self.sampling,
            RequestMetadata::for_decision(*decision.user_id(), *decision.id()),
        )
    }
}

#[async_trait]
impl ScenarioGenerator for LlmScenarioGenerator {
    async fn generate(
        &self,
        decision: &Decision,
        request: &SimulationRequest,
    ) -> Vec<ScenarioDraft> {
        let completion = self.completion_request(decision, request);

        let reply = match self.provider.complete(completion).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(
                    decision_id = %decision.id(),
                    provider = %self.name,
                    error = %err,
                    transient = err.is_transient(),
                    "Scenario model call failed, using template scenarios"
                );
                return self.fallback.synthesize(decision, request);
            }
        };

        let drafts = parse_scenarios(&reply.content);
        if drafts.is_empty() {
            tracing::info!(
                decision_id = %decision.id(),
                provider = %self.name,
                reply_len = reply.content.len(),
                "No scenarios extracted from model reply, using template scenarios"
            );
            return self.fallback.synthesize(decision, request);
        }

        tracing::debug!(
            decision_id = %decision.id(),
            provider = %self.name,
            model = %reply.model,
            scenarios = drafts.len(),
            tokens = ?reply.tokens_used,
            truncated = reply.truncated,
            "Parsed scenarios from model reply"
        );
        drafts
    }

    fn name(&self) -> &str {
        &self.name
    }
}
