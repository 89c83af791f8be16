//! OpenAI chat completions adapter.
//!
//! ```ignore
//! let provider = OpenAIProvider::new(
//!     OpenAIConfig::new(api_key)
//!         .with_model("gpt-4")
//!         .with_timeout(Duration::from_secs(60)),
//! )?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http_errors::{malformed, send_error, status_error};
use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

const PROVIDER_NAME: &str = "openai";
const FALLBACK_RETRY_SECS: u32 = 30;

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    pub model: String,
    /// Defaults to https://api.openai.com/v1. Any compatible gateway works.
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
    endpoint: String,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::ClientSetup(e.to_string()))?;
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        Ok(Self {
            config,
            client,
            endpoint,
        })
    }

    fn chat_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatBody<'a> {
        ChatBody {
            model: &self.config.model,
            messages: [
                ChatTurn {
                    role: "system",
                    content: &request.system,
                },
                ChatTurn {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.sampling.temperature,
            max_tokens: request.sampling.max_tokens,
        }
    }
}

impl ChatReply {
    fn into_completion(self) -> Result<CompletionResponse, AIError> {
        let Some(choice) = self.choices.into_iter().next() else {
            return Err(AIError::MalformedReply("reply has no choices".to_string()));
        };

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            model: self.model,
            tokens_used: self.usage.map(|u| u.total_tokens),
            truncated: CompletionResponse::stopped_early(choice.finish_reason.as_deref()),
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "Calling OpenAI"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&self.chat_body(&request))
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body, FALLBACK_RETRY_SECS));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(malformed)?
            .into_completion()
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new(PROVIDER_NAME, &self.config.model)
    }
}

#[derive(Debug, Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: [ChatTurn<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    model: String,
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DecisionId, UserId};
    use crate::ports::{RequestMetadata, Sampling};
    use serde_json::json;

    fn provider() -> OpenAIProvider {
        OpenAIProvider::new(OpenAIConfig::new("sk-test").with_base_url("https://llm.test/v1/"))
            .unwrap()
    }

    fn reply(raw: &str) -> Result<CompletionResponse, AIError> {
        serde_json::from_str::<ChatReply>(raw).unwrap().into_completion()
    }

    #[test]
    fn config_defaults_and_overrides() {
        let config = OpenAIConfig::new("k");
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.timeout, Duration::from_secs(60));

        let config = config.with_model("gpt-4o").with_timeout(Duration::from_secs(30));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", OpenAIConfig::new("sk-very-secret"));
        assert!(!rendered.contains("sk-very-secret"));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(provider().endpoint, "https://llm.test/v1/chat/completions");
    }

    #[test]
    fn body_sends_system_then_user_turn() {
        let provider = provider();
        let request = CompletionRequest::new(
            "analyst",
            "simulate",
            Sampling::new(0.5, 2000),
            RequestMetadata::for_decision(UserId::new(), DecisionId::new()),
        );

        let body = serde_json::to_value(provider.chat_body(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "analyst"},
                    {"role": "user", "content": "simulate"}
                ],
                "temperature": 0.5,
                "max_tokens": 2000
            })
        );
    }

    #[test]
    fn reply_takes_first_choice() {
        let completion = reply(
            r#"{"model":"gpt-4-0613","choices":[{"message":{"role":"assistant","content":"{\"title\":\"A\"}"},"finish_reason":"stop"}],"usage":{"prompt_tokens":12,"completion_tokens":8,"total_tokens":20}}"#,
        )
        .unwrap();

        assert_eq!(completion.content, "{\"title\":\"A\"}");
        assert_eq!(completion.model, "gpt-4-0613");
        assert_eq!(completion.tokens_used, Some(20));
        assert!(!completion.truncated);
    }

    #[test]
    fn reply_cut_at_length_is_flagged() {
        let completion = reply(
            r#"{"model":"gpt-4","choices":[{"message":{"content":"{\"ti"},"finish_reason":"length"}]}"#,
        )
        .unwrap();
        assert!(completion.truncated);
        assert_eq!(completion.tokens_used, None);
    }

    #[test]
    fn reply_without_choices_is_malformed() {
        assert!(matches!(
            reply(r#"{"model":"gpt-4","choices":[]}"#),
            Err(AIError::MalformedReply(_))
        ));
    }

    #[test]
    fn provider_info_reports_model() {
        assert_eq!(provider().provider_info(), ProviderInfo::new("openai", "gpt-4"));
    }
}
