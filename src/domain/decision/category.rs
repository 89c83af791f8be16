//! Decision category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Life area a decision belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionCategory {
    Career,
    Finance,
    Health,
    Business,
    Education,
    Personal,
}

impl DecisionCategory {
    pub const ALL: [DecisionCategory; 6] = [
        DecisionCategory::Career,
        DecisionCategory::Finance,
        DecisionCategory::Health,
        DecisionCategory::Business,
        DecisionCategory::Education,
        DecisionCategory::Personal,
    ];

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionCategory::Career => "career",
            DecisionCategory::Finance => "finance",
            DecisionCategory::Health => "health",
            DecisionCategory::Business => "business",
            DecisionCategory::Education => "education",
            DecisionCategory::Personal => "personal",
        }
    }
}

impl fmt::Display for DecisionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecisionCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category '{}'", s))
            })
    }
}
