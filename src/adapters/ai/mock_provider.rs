//! Scripted provider for tests.
//!
//! Outcomes are queued up front and handed out in order. Every request is
//! kept so a test can look at the prompt that went out.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"title": "Leap"}"#)
//!     .with_error(AIError::Unauthorized);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Reply used once the script runs out. Contains no JSON object.
const UNSCRIPTED_REPLY: &str = "Mock response";

#[derive(Debug, Clone)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<Result<String, AIError>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    info: ProviderInfo,
    latency: Duration,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            script: Arc::default(),
            calls: Arc::default(),
            info: ProviderInfo::new("mock", "mock-model-1"),
            latency: Duration::ZERO,
        }
    }

    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.script().push_back(Ok(content.into()));
        self
    }

    pub fn with_error(self, error: AIError) -> Self {
        self.script().push_back(Err(error));
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls().clone()
    }

    fn script(&self) -> MutexGuard<'_, VecDeque<Result<String, AIError>>> {
        self.script.lock().expect("MockAIProvider: lock poisoned")
    }

    fn calls(&self) -> MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls.lock().expect("MockAIProvider: lock poisoned")
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls().push(request);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let next = self.script().pop_front();
        let content = next.unwrap_or_else(|| Ok(UNSCRIPTED_REPLY.to_string()))?;

        Ok(CompletionResponse {
            tokens_used: Some((content.len() / 4) as u32),
            content,
            model: self.info.model.clone(),
            truncated: false,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
