//! CreateDecisionHandler - Command handler for journaling a new decision.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionCategory, DecisionContext, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Command to create a new decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub category: DecisionCategory,
    pub context: DecisionContext,
}

/// Handler for creating decisions. New decisions start as drafts.
pub struct CreateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CreateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, DecisionError> {
        let decision = Decision::new(
            DecisionId::new(),
            cmd.user_id,
            cmd.title,
            cmd.description,
            cmd.category,
            cmd.context,
        )?;

        self.repository.save(&decision).await?;

        tracing::info!(
            decision_id = %decision.id(),
            user_id = %decision.user_id(),
            category = %decision.category(),
            "Decision created"
        );

        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDecisionRepository;
    use crate::domain::decision::{ContextValue, DecisionStatus};

    fn command(title: &str) -> CreateDecisionCommand {
        CreateDecisionCommand {
            user_id: UserId::new(),
            title: title.to_string(),
            description: None,
            category: DecisionCategory::Finance,
            context: DecisionContext::new().with("budget", ContextValue::Integer(20_000)),
        }
    }

    #[tokio::test]
    async fn creates_draft_and_persists() {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let handler = CreateDecisionHandler::new(repo.clone());

        let decision = handler.handle(command("  Buy a house  ")).await.unwrap();

        assert_eq!(decision.title(), "Buy a house");
        assert_eq!(decision.status(), DecisionStatus::Draft);
        assert!(repo.find_by_id(decision.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn blank_title_is_validation_error() {
        let handler = CreateDecisionHandler::new(Arc::new(InMemoryDecisionRepository::new()));

        let err = handler.handle(command("   ")).await.unwrap_err();

        assert!(matches!(err, DecisionError::ValidationFailed { ref field, .. } if field == "title"));
    }
}
