//! Language model port.
//!
//! Scenario generation is a single turn: one system instruction, one user
//! prompt, one text reply. Adapters translate that into each vendor's wire
//! format.
//!
//! ```ignore
//! let request = CompletionRequest::new(
//!     SCENARIO_SYSTEM_PROMPT,
//!     prompt,
//!     Sampling::new(0.8, 2000),
//!     RequestMetadata::for_decision(user_id, decision_id),
//! );
//! let reply = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{DecisionId, UserId};

/// A text completion backend.
#[async_trait]
pub trait AIProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Vendor and model this provider talks to.
    fn provider_info(&self) -> ProviderInfo;
}

/// One system instruction plus one user prompt.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub sampling: Sampling,
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    pub fn new(
        system: impl Into<String>,
        prompt: impl Into<String>,
        sampling: Sampling,
        metadata: RequestMetadata,
    ) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            sampling,
            metadata,
        }
    }
}

/// Sampling knobs forwarded verbatim to the vendor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Sampling {
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Correlates a provider call with the decision it was made for.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub trace_id: String,
}

impl RequestMetadata {
    /// Metadata with a fresh random trace id.
    pub fn for_decision(user_id: UserId, decision_id: DecisionId) -> Self {
        Self {
            user_id,
            decision_id,
            trace_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Reply text and what the vendor reported about producing it.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    /// Model name echoed by the vendor, which may be more specific than
    /// the configured one.
    pub model: String,
    pub tokens_used: Option<u32>,
    /// True when generation stopped at the token limit.
    pub truncated: bool,
}

impl CompletionResponse {
    /// Reads the vendor's stop reason; "length" and "max_tokens" mean the
    /// reply was cut off.
    pub fn stopped_early(stop_reason: Option<&str>) -> bool {
        matches!(stop_reason, Some("length") | Some("max_tokens"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// "openai", "anthropic" or "mock".
    pub name: String,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AIError {
    #[error("provider rejected the API key")]
    Unauthorized,

    #[error("provider throttled the request, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("prompt does not fit the model context: {0}")]
    PromptTooLong(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("no reply within {after_secs}s")]
    TimedOut { after_secs: u32 },

    #[error("unreadable provider reply: {0}")]
    MalformedReply(String),

    #[error("provider refused request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("could not build HTTP client: {0}")]
    ClientSetup(String),
}

impl AIError {
    /// Whether an identical call could succeed later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AIError::RateLimited { .. }
                | AIError::Unavailable(_)
                | AIError::Transport(_)
                | AIError::TimedOut { .. }
        )
    }
}
