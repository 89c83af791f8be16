//! Behaviour switches that are off unless set.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Put the underlying error text into 500 bodies. Local debugging only.
    #[serde(default)]
    pub verbose_errors: bool,

    /// Use template scenarios even when a provider key is configured.
    #[serde(default)]
    pub force_mock_scenarios: bool,
}
