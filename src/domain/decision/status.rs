//! DecisionStatus lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a decision.
///
/// A simulation run moves `Draft`/`Completed` to `Simulating`, then on to
/// `Completed` or back to `Draft` when the run fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Draft,
    Simulating,
    Completed,
    Archived,
}

impl DecisionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Draft => "draft",
            DecisionStatus::Simulating => "simulating",
            DecisionStatus::Completed => "completed",
            DecisionStatus::Archived => "archived",
        }
    }

    /// Returns true if a new simulation may start from this status.
    pub fn can_simulate(&self) -> bool {
        self.can_transition_to(&DecisionStatus::Simulating)
    }
}

impl StateMachine for DecisionStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use DecisionStatus::*;
        match self {
            Draft => vec![Simulating, Archived],
            Simulating => vec![Completed, Draft],
            Completed => vec![Simulating, Archived],
            Archived => vec![Draft],
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(DecisionStatus::Draft),
            "simulating" => Ok(DecisionStatus::Simulating),
            "completed" => Ok(DecisionStatus::Completed),
            "archived" => Ok(DecisionStatus::Archived),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
