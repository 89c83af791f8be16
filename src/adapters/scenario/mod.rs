//! Scenario generation strategies and their selection.
//!
//! - `TemplateScenarioGenerator` - archetype templates, no external calls
//! - `LlmScenarioGenerator` - external model, falls back to templates
//!
//! [`select_scenario_generator`] picks one strategy at startup from
//! configuration; handlers only ever see `Arc<dyn ScenarioGenerator>`.

mod llm;
mod template;

pub use llm::LlmScenarioGenerator;
pub use template::TemplateScenarioGenerator;

use std::sync::Arc;

use crate::adapters::ai::{AnthropicConfig, AnthropicProvider, OpenAIConfig, OpenAIProvider};
use crate::config::{AiConfig, AiProvider, FeatureFlags};
use crate::ports::{AIError, AIProvider as AIProviderPort, ScenarioGenerator};

/// Choose the scenario strategy for this process.
///
/// Order: forced templates, then the primary provider if its key is set,
/// then the other provider, then templates.
///
/// # Errors
///
/// Returns `AIError` only if the HTTP client for a configured provider
/// cannot be built.
pub fn select_scenario_generator(
    ai: &AiConfig,
    features: &FeatureFlags,
) -> Result<Arc<dyn ScenarioGenerator>, AIError> {
    if features.force_mock_scenarios {
        tracing::info!("Template scenarios forced by feature flag");
        return Ok(Arc::new(TemplateScenarioGenerator::new()));
    }

    let order = match ai.primary_provider {
        AiProvider::OpenAI => [AiProvider::OpenAI, AiProvider::Anthropic],
        AiProvider::Anthropic => [AiProvider::Anthropic, AiProvider::OpenAI],
    };

    for candidate in order {
        if let Some(provider) = build_provider(candidate, ai)? {
            let info = provider.provider_info();
            tracing::info!(
                provider = %info.name,
                model = %info.model,
                "Scenario generation uses external model"
            );
            return Ok(Arc::new(LlmScenarioGenerator::new(
                provider,
                ai.temperature,
                ai.max_tokens,
            )));
        }
    }

    tracing::info!("No AI provider key configured, using template scenarios");
    Ok(Arc::new(TemplateScenarioGenerator::new()))
}

fn build_provider(
    which: AiProvider,
    ai: &AiConfig,
) -> Result<Option<Arc<dyn AIProviderPort>>, AIError> {
    let provider: Arc<dyn AIProviderPort> = match which {
        AiProvider::OpenAI => {
            let Some(key) = ai.openai_key() else {
                return Ok(None);
            };
            let config = OpenAIConfig::new(key)
                .with_model(&ai.openai_model)
                .with_timeout(ai.timeout());
            Arc::new(OpenAIProvider::new(config)?)
        }
        AiProvider::Anthropic => {
            let Some(key) = ai.anthropic_key() else {
                return Ok(None);
            };
            let config = AnthropicConfig::new(key)
                .with_model(&ai.anthropic_model)
                .with_timeout(ai.timeout());
            Arc::new(AnthropicProvider::new(config)?)
        }
    };
    Ok(Some(provider))
}
