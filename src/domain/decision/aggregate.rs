//! Decision aggregate.
//!
//! A decision is owned by exactly one user and carries the inputs that the
//! scenario pipeline renders into a prompt. Its status tracks simulation
//! runs; the scenarios themselves live in the scenario module and are
//! replaced wholesale on every run.

use crate::domain::foundation::{
    DecisionId, DomainError, ErrorCode, StateMachine, Timestamp, UserId,
};

use super::{DecisionCategory, DecisionContext, DecisionStatus};

/// Maximum length for decision title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Decision aggregate.
///
/// # Invariants
///
/// - `title` is 1-500 characters after trimming
/// - `status` only changes along `DecisionStatus` transitions
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    id: DecisionId,
    user_id: UserId,
    title: String,
    description: Option<String>,
    category: DecisionCategory,
    context: DecisionContext,
    status: DecisionStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Decision {
    /// Create a new draft decision.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is empty or too long
    pub fn new(
        id: DecisionId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        category: DecisionCategory,
        context: DecisionContext,
    ) -> Result<Self, DomainError> {
        let title = Self::validate_title(title)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            title,
            description,
            category,
            context,
            status: DecisionStatus::Draft,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a decision from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DecisionId,
        user_id: UserId,
        title: String,
        description: Option<String>,
        category: DecisionCategory,
        context: DecisionContext,
        status: DecisionStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            category,
            context,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> DecisionCategory {
        self.category
    }

    pub fn context(&self) -> &DecisionContext {
        &self.context
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can access this decision.
    ///
    /// Foreign decisions are reported as missing so their existence is not
    /// revealed.
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::DecisionNotFound,
                "Decision not found",
            ))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn rename(&mut self, title: String) -> Result<(), DomainError> {
        self.title = Self::validate_title(title)?;
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    pub fn recategorize(&mut self, category: DecisionCategory) {
        self.category = category;
        self.touch();
    }

    pub fn replace_context(&mut self, context: DecisionContext) {
        self.context = context;
        self.touch();
    }

    /// Moves to `target` if the lifecycle allows it. Same-status requests
    /// are accepted as no-ops.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the edge does not exist
    pub fn change_status(&mut self, target: DecisionStatus) -> Result<(), DomainError> {
        if self.status == target {
            return Ok(());
        }
        self.status = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                .with_detail("from", self.status.as_str())
                .with_detail("to", target.as_str())
        })?;
        self.touch();
        Ok(())
    }

    /// Marks the decision as having a simulation in flight.
    pub fn begin_simulation(&mut self) -> Result<(), DomainError> {
        if self.status == DecisionStatus::Simulating {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "A simulation is already running for this decision",
            ));
        }
        self.change_status(DecisionStatus::Simulating)
    }

    pub fn complete_simulation(&mut self) -> Result<(), DomainError> {
        self.change_status(DecisionStatus::Completed)
    }

    /// Returns a failed run to draft so the user can retry.
    pub fn revert_to_draft(&mut self) {
        if self.status == DecisionStatus::Simulating {
            self.status = DecisionStatus::Draft;
            self.touch();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn validate_title(title: String) -> Result<String, DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        if trimmed.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(
                "title",
                format!("Title cannot exceed {} characters", MAX_TITLE_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}
