//! ListDecisionsHandler - Query handler for a user's decisions.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::UserId;
use crate::ports::DecisionRepository;

/// Largest page the list endpoint returns.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub user_id: UserId,
    pub skip: u32,
    pub limit: u32,
}

pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Most recently updated first; `limit` is capped at [`MAX_PAGE_SIZE`].
    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, DecisionError> {
        let limit = query.limit.min(MAX_PAGE_SIZE);
        Ok(self
            .repository
            .find_by_user_id(&query.user_id, query.skip, limit)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::career_decision;
    use super::*;
    use crate::adapters::memory::InMemoryDecisionRepository;

    #[tokio::test]
    async fn caps_page_size() {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let owner = UserId::new();
        for _ in 0..(MAX_PAGE_SIZE + 5) {
            repo.save(&career_decision(owner)).await.unwrap();
        }
        let handler = ListDecisionsHandler::new(repo);

        let page = handler
            .handle(ListDecisionsQuery {
                user_id: owner,
                skip: 0,
                limit: 1000,
            })
            .await
            .unwrap();

        assert_eq!(page.len(), MAX_PAGE_SIZE as usize);
    }
}
