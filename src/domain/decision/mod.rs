//! Decision domain module.
//!
//! Decisions are the records users journal and simulate. Status follows
//! `DecisionStatus`; scenarios are owned by the scenario module.

mod aggregate;
mod category;
mod context;
mod errors;
mod status;

pub use aggregate::{Decision, MAX_TITLE_LENGTH};
pub use category::DecisionCategory;
pub use context::{ContextValue, DecisionContext};
pub use errors::DecisionError;
pub use status::DecisionStatus;
