//! Scenario domain module.
//!
//! Holds the scenario entity and the three pure stages of scenario
//! generation: prompt building, reply parsing, and template synthesis.

mod entity;
pub mod mock;
pub mod parser;
pub mod prompt;
mod values;

pub use entity::{sort_by_rank, Scenario};
pub use mock::generate_mock_scenarios;
pub use parser::parse_scenarios;
pub use prompt::{build_scenario_prompt, SCENARIO_SYSTEM_PROMPT};
pub use values::{
    FinancialProjection, Impact, Outcomes, RiskFactor, ScenarioDraft, Severity,
    SimulationRequest, TimelineEntry, MAX_HORIZON_YEARS, MAX_SCENARIOS, MIN_HORIZON_YEARS,
    MIN_SCENARIOS,
};
