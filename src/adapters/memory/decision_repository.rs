use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, UserId};
use crate::ports::DecisionRepository;

/// In-memory decision store.
#[derive(Debug, Default)]
pub struct InMemoryDecisionRepository {
    decisions: RwLock<HashMap<DecisionId, Decision>>,
}

impl InMemoryDecisionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &DecisionId) -> DomainError {
    DomainError::new(ErrorCode::DecisionNotFound, format!("Decision not found: {}", id))
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        self.decisions
            .write()
            .expect("InMemoryDecisionRepository: lock poisoned")
            .insert(*decision.id(), decision.clone());
        Ok(())
    }

    async fn update(&self, decision: &Decision) -> Result<(), DomainError> {
        let mut decisions = self
            .decisions
            .write()
            .expect("InMemoryDecisionRepository: lock poisoned");
        match decisions.get_mut(decision.id()) {
            Some(slot) => {
                *slot = decision.clone();
                Ok(())
            }
            None => Err(not_found(decision.id())),
        }
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError> {
        Ok(self
            .decisions
            .read()
            .expect("InMemoryDecisionRepository: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Decision>, DomainError> {
        let mut owned: Vec<Decision> = self
            .decisions
            .read()
            .expect("InMemoryDecisionRepository: lock poisoned")
            .values()
            .filter(|d| d.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));

        Ok(owned
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        self.decisions
            .write()
            .expect("InMemoryDecisionRepository: lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
