//! Stress source configuration: what frightens a character, how stress
//! recovers, and where trauma checks reset to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of `stress-sources.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StressConfig {
    /// Configuration format version (`MAJOR.MINOR`).
    pub version: String,
    /// Sources grouped by freeform category name (`combat`, `eldritch`, ...).
    pub stress_sources: BTreeMap<String, Vec<StressSource>>,
    /// Recovery formulas keyed by rest kind.
    pub recovery_rates: BTreeMap<String, RecoveryRate>,
    /// Stress values after a trauma check.
    pub trauma_check_reset: TraumaCheckReset,
}

impl StressConfig {
    /// Looks up a source by id across all categories.
    pub fn source(&self, id: &str) -> Option<&StressSource> {
        self.stress_sources
            .values()
            .flatten()
            .find(|s| s.id == id)
    }
}

/// One stress-inducing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StressSource {
    /// Kebab-case source id.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stress gained on exposure.
    pub base_stress: u32,
    /// WILL check difficulty to resist; 0 means unavoidable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resist_dc: Option<u32>,
    /// Flavor description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// How much stress one rest kind removes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecoveryRate {
    /// Recovery formula, e.g. `WILL × 2` or `FULL_RESET`.
    pub formula: String,
    /// What the formula means.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Stress values a character resets to after a trauma check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TraumaCheckReset {
    /// Reset value when the check passes.
    pub passed: u32,
    /// Reset value when the check fails.
    pub failed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_deserializes_with_freeform_categories() {
        let config: StressConfig = serde_json::from_value(json!({
            "version": "1.0",
            "stressSources": {
                "combat": [
                    { "id": "ally-downed", "baseStress": 20, "resistDc": 2 }
                ],
                "eldritch": [
                    { "id": "blight-sight", "name": "Witnessing the Blight", "baseStress": 35 }
                ]
            },
            "recoveryRates": {
                "shortRest": { "formula": "WILL × 2" },
                "longRest": { "formula": "WILL × 5" },
                "sanctuary": { "formula": "FULL_RESET" },
                "milestone": { "formula": "25" }
            },
            "traumaCheckReset": { "passed": 75, "failed": 50 }
        }))
        .expect("config should deserialize");

        assert_eq!(config.source("blight-sight").and_then(|s| s.name.as_deref()),
            Some("Witnessing the Blight"));
        assert_eq!(config.trauma_check_reset.passed, 75);
        assert_eq!(config.recovery_rates["sanctuary"].formula, "FULL_RESET");
    }
}
