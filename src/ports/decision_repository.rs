//! Decision repository port.

use async_trait::async_trait;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError, UserId};

/// Repository port for Decision aggregate persistence.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Save a new decision.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, decision: &Decision) -> Result<(), DomainError>;

    /// Update an existing decision.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, decision: &Decision) -> Result<(), DomainError>;

    /// Find a decision by its ID, regardless of owner.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError>;

    /// Page through a user's decisions, most recently updated first.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Decision>, DomainError>;

    /// Delete a decision and, where storage supports it, its scenarios.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision doesn't exist
    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DecisionRepository) {}
    }
}
