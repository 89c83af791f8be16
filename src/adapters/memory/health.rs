//! Health check with a fixed outcome.

use async_trait::async_trait;

use crate::ports::HealthCheck;

#[derive(Debug, Clone, Default)]
pub struct InMemoryHealthCheck {
    failure: Option<String>,
}

impl InMemoryHealthCheck {
    pub fn healthy() -> Self {
        Self { failure: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl HealthCheck for InMemoryHealthCheck {
    async fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}
