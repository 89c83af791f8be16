//! Scenario value objects.
//!
//! These are the typed shapes for what the external model (or the mock
//! generator) produces: timeline milestones, outcome projections and risk
//! factors. They serialize to the JSON stored in the scenario columns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Smallest number of scenarios a simulation may request.
pub const MIN_SCENARIOS: u8 = 2;
/// Largest number of scenarios a simulation may request.
pub const MAX_SCENARIOS: u8 = 5;
/// Shortest time horizon, in years.
pub const MIN_HORIZON_YEARS: u8 = 1;
/// Longest time horizon, in years.
pub const MAX_HORIZON_YEARS: u8 = 10;

/// Parameters for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRequest {
    num_scenarios: u8,
    time_horizon_years: u8,
}

impl SimulationRequest {
    pub const DEFAULT_SCENARIOS: u8 = 3;
    pub const DEFAULT_HORIZON_YEARS: u8 = 5;

    /// Validates both bounds.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if scenarios is outside 2..=5 or horizon outside 1..=10
    pub fn new(num_scenarios: i64, time_horizon_years: i64) -> Result<Self, ValidationError> {
        let num_scenarios = Self::bounded("num_scenarios", num_scenarios, MIN_SCENARIOS, MAX_SCENARIOS)?;
        let time_horizon_years = Self::bounded(
            "time_horizon_years",
            time_horizon_years,
            MIN_HORIZON_YEARS,
            MAX_HORIZON_YEARS,
        )?;
        Ok(Self {
            num_scenarios,
            time_horizon_years,
        })
    }

    pub fn num_scenarios(&self) -> u8 {
        self.num_scenarios
    }

    pub fn time_horizon_years(&self) -> u8 {
        self.time_horizon_years
    }

    fn bounded(field: &str, value: i64, min: u8, max: u8) -> Result<u8, ValidationError> {
        if value < i64::from(min) || value > i64::from(max) {
            return Err(ValidationError::out_of_range(
                field,
                i64::from(min),
                i64::from(max),
                value,
            ));
        }
        Ok(value as u8)
    }
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            num_scenarios: Self::DEFAULT_SCENARIOS,
            time_horizon_years: Self::DEFAULT_HORIZON_YEARS,
        }
    }
}

/// Direction of a timeline milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Impact {
    /// Lenient parse used at the model boundary; unknown words are neutral.
    pub fn from_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "good" => Impact::Positive,
            "negative" | "bad" => Impact::Negative,
            _ => Impact::Neutral,
        }
    }
}

/// Risk severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    /// Lenient parse used at the model boundary; unknown words are medium.
    pub fn from_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "minor" => Severity::Low,
            "high" | "severe" | "critical" => Severity::High,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One milestone on a scenario timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub event: String,
    pub impact: Impact,
}

impl TimelineEntry {
    pub fn new(period: impl Into<String>, event: impl Into<String>, impact: Impact) -> Self {
        Self {
            period: period.into(),
            event: event.into(),
            impact,
        }
    }
}

/// Projected financial position keyed by year number.
pub type FinancialProjection = BTreeMap<u32, i64>;

/// Quantitative outcomes of a scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcomes {
    #[serde(default)]
    pub financial: FinancialProjection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_investment_hours: Option<u32>,
}

/// A named risk with severity and mitigation advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub severity: Severity,
    pub mitigation: String,
}

impl RiskFactor {
    pub fn new(factor: impl Into<String>, severity: Severity, mitigation: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            severity,
            mitigation: mitigation.into(),
        }
    }
}

/// A generated scenario before it is attached to a decision and persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraft {
    pub title: String,
    pub description: String,
    /// Likelihood in 0.0..=1.0.
    pub probability: f64,
    pub timeline: Vec<TimelineEntry>,
    pub outcomes: Outcomes,
    pub risks: Vec<RiskFactor>,
    pub recommendations: String,
    /// 1-based display order.
    pub rank: u32,
}
