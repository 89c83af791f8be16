//! Anthropic Messages API adapter.
//!
//! The system instruction goes in the top-level `system` field and the
//! prompt is the only message.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::http_errors::{malformed, send_error, status_error};
use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

const PROVIDER_NAME: &str = "anthropic";
const API_VERSION: &str = "2023-06-01";
const FALLBACK_RETRY_SECS: u32 = 60;

#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    api_key: Secret<String>,
    pub model: String,
    /// Defaults to https://api.anthropic.com.
    pub base_url: String,
    pub timeout: Duration,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
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

pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
    endpoint: String,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::ClientSetup(e.to_string()))?;
        let endpoint = format!("{}/v1/messages", config.base_url.trim_end_matches('/'));

        Ok(Self {
            config,
            client,
            endpoint,
        })
    }

    fn messages_body<'a>(&'a self, request: &'a CompletionRequest) -> MessagesBody<'a> {
        MessagesBody {
            model: &self.config.model,
            system: &request.system,
            messages: [UserTurn {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.sampling.max_tokens,
            temperature: request.sampling.temperature,
        }
    }
}

impl MessagesReply {
    /// Text blocks are concatenated; tool and other block kinds are skipped.
    fn into_completion(self) -> CompletionResponse {
        let content: String = self
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect();

        CompletionResponse {
            content,
            model: self.model,
            tokens_used: Some(self.usage.input_tokens + self.usage.output_tokens),
            truncated: CompletionResponse::stopped_early(self.stop_reason.as_deref()),
        }
    }
}

#[async_trait]
impl AIProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.metadata.trace_id,
            model = %self.config.model,
            "Calling Anthropic"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", self.config.api_key.expose_secret())
            .header("anthropic-version", API_VERSION)
            .json(&self.messages_body(&request))
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body, FALLBACK_RETRY_SECS));
        }

        let reply: MessagesReply = response.json().await.map_err(malformed)?;
        Ok(reply.into_completion())
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new(PROVIDER_NAME, &self.config.model)
    }
}

#[derive(Debug, Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesReply {
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: MessagesUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessagesUsage {
    input_tokens: u32,
    output_tokens: u32,
}
