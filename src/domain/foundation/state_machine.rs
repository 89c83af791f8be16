//! Lifecycle enums driven by an explicit edge list.

use super::ValidationError;

/// Implementors supply `valid_transitions`; everything else follows.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Outgoing edges from this state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// `target` if the edge exists, otherwise a validation error on "status".
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("no transition from {:?} to {:?}", self, target),
            ))
        }
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
