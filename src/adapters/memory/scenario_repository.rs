use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::domain::scenario::{sort_by_rank, Scenario};
use crate::ports::ScenarioRepository;

/// In-memory scenario sets keyed by decision.
#[derive(Debug, Default)]
pub struct InMemoryScenarioRepository {
    sets: RwLock<HashMap<DecisionId, Vec<Scenario>>>,
    /// Makes every replace fail, for exercising rollback paths.
    fail_writes: AtomicBool,
}

impl InMemoryScenarioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryScenarioRepository {
    async fn replace_for_decision(
        &self,
        decision_id: &DecisionId,
        scenarios: &[Scenario],
    ) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Failed to replace scenarios: simulated write failure",
            ));
        }
        self.sets
            .write()
            .expect("InMemoryScenarioRepository: lock poisoned")
            .insert(*decision_id, scenarios.to_vec());
        Ok(())
    }

    async fn find_by_decision(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<Scenario>, DomainError> {
        let mut scenarios = self
            .sets
            .read()
            .expect("InMemoryScenarioRepository: lock poisoned")
            .get(decision_id)
            .cloned()
            .unwrap_or_default();
        sort_by_rank(&mut scenarios);
        Ok(scenarios)
    }

    async fn delete_for_decision(&self, decision_id: &DecisionId) -> Result<(), DomainError> {
        self.sets
            .write()
            .expect("InMemoryScenarioRepository: lock poisoned")
            .remove(decision_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::ScenarioDraft;

    fn scenario(decision_id: DecisionId, rank: u32) -> Scenario {
        Scenario::from_draft(
            decision_id,
            ScenarioDraft {
                title: format!("Scenario {}", rank),
                description: String::new(),
                probability: 0.5,
                timeline: Vec::new(),
                outcomes: Default::default(),
                risks: Vec::new(),
                recommendations: String::new(),
                rank,
            },
        )
    }

    #[tokio::test]
    async fn replace_discards_previous_set() {
        let repo = InMemoryScenarioRepository::new();
        let id = DecisionId::new();
        repo.replace_for_decision(&id, &[scenario(id, 1), scenario(id, 2), scenario(id, 3)])
            .await
            .unwrap();

        let fresh = vec![scenario(id, 2), scenario(id, 1)];
        repo.replace_for_decision(&id, &fresh).await.unwrap();

        let stored = repo.find_by_decision(&id).await.unwrap();
        let ranks: Vec<u32> = stored.iter().map(Scenario::rank).collect();
        assert_eq!(ranks, vec![1, 2]);
        assert!(stored.iter().all(|s| fresh.iter().any(|f| f.id() == s.id())));
    }

    #[tokio::test]
    async fn failed_replace_keeps_previous_set() {
        let repo = InMemoryScenarioRepository::new();
        let id = DecisionId::new();
        repo.replace_for_decision(&id, &[scenario(id, 1)]).await.unwrap();

        repo.set_fail_writes(true);
        assert!(repo.replace_for_decision(&id, &[]).await.is_err());

        assert_eq!(repo.find_by_decision(&id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_decision_has_no_scenarios() {
        let repo = InMemoryScenarioRepository::new();
        assert!(repo.find_by_decision(&DecisionId::new()).await.unwrap().is_empty());
    }
}
