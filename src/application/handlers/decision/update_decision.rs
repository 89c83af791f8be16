//! UpdateDecisionHandler - Command handler for partial decision edits.

use std::sync::Arc;

use crate::domain::decision::{
    Decision, DecisionCategory, DecisionContext, DecisionError, DecisionStatus,
};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

use super::load_owned;

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDecisionCommand {
    pub decision_id: DecisionId,
    pub user_id: UserId,
    pub title: Option<String>,
    /// A blank description clears it.
    pub description: Option<String>,
    pub category: Option<DecisionCategory>,
    pub context: Option<DecisionContext>,
    pub status: Option<DecisionStatus>,
}

pub struct UpdateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl UpdateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<Decision, DecisionError> {
        let mut decision =
            load_owned(self.repository.as_ref(), cmd.decision_id, &cmd.user_id).await?;

        if let Some(title) = cmd.title {
            decision.rename(title)?;
        }
        if let Some(description) = cmd.description {
            let description = Some(description).filter(|d| !d.trim().is_empty());
            decision.update_description(description);
        }
        if let Some(category) = cmd.category {
            decision.recategorize(category);
        }
        if let Some(context) = cmd.context {
            decision.replace_context(context);
        }
        if let Some(status) = cmd.status {
            decision.change_status(status)?;
        }

        self.repository.update(&decision).await?;

        tracing::info!(
            decision_id = %decision.id(),
            status = %decision.status(),
            "Decision updated"
        );

        Ok(decision)
    }
}
