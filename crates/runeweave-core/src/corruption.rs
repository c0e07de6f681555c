//! Corruption source configuration: how characters accumulate corruption,
//! what happens at each threshold, and the derived stat penalties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of `corruption-sources.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorruptionConfig {
    /// Configuration format version (`MAJOR.MINOR`).
    pub version: String,
    /// Sources grouped by origin category.
    pub corruption_sources: CorruptionSources,
    /// Effects triggered at the 25/50/75/100 corruption thresholds.
    pub threshold_effects: BTreeMap<String, ThresholdEffect>,
    /// Derived stat penalty formulas.
    pub penalties: Penalties,
}

impl CorruptionConfig {
    /// Every source across all categories, in category order.
    pub fn all_sources(&self) -> impl Iterator<Item = &CorruptionSource> {
        let s = &self.corruption_sources;
        s.mystic_magic
            .iter()
            .chain(&s.heretical_ability)
            .chain(&s.environmental)
            .chain(&s.items)
    }

    /// Looks up a source by id across all categories.
    pub fn source(&self, id: &str) -> Option<&CorruptionSource> {
        self.all_sources().find(|s| s.id == id)
    }
}

/// Corruption sources grouped by origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorruptionSources {
    /// Spellcasting through mystic channels.
    #[serde(default)]
    pub mystic_magic: Vec<CorruptionSource>,
    /// Heretical abilities that trade flesh or soul for power.
    #[serde(default)]
    pub heretical_ability: Vec<CorruptionSource>,
    /// Blighted terrain and weather.
    #[serde(default)]
    pub environmental: Vec<CorruptionSource>,
    /// Cursed or Blight-touched items.
    #[serde(default)]
    pub items: Vec<CorruptionSource>,
}

/// One way of gaining corruption. A source rolls a range
/// (`min_corruption..=max_corruption`), applies a fixed amount, or scales
/// per hit point spent; the unused fields stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorruptionSource {
    /// Kebab-case source id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lower bound of rolled corruption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_corruption: Option<u32>,
    /// Upper bound of rolled corruption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_corruption: Option<u32>,
    /// Flat corruption amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_corruption: Option<u32>,
    /// Corruption per hit point sacrificed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corruption_per_hp: Option<u32>,
    /// Whether the source applies once per exposure rather than per use.
    #[serde(default)]
    pub per_exposure: bool,
    /// Flavor description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// What happens when total corruption crosses a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThresholdEffect {
    /// Player-facing description of the effect.
    pub description: String,
    /// Whether the UI shows a standing warning.
    #[serde(default)]
    pub ui_warning: bool,
    /// Whether pure factions refuse the character.
    #[serde(default)]
    pub faction_lock: bool,
    /// Permanent trauma applied at this threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trauma_id: Option<String>,
    /// Whether the character is lost at this threshold.
    #[serde(default)]
    pub terminal_error: bool,
}

/// The three derived stat penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Penalties {
    /// Maximum hit point reduction.
    pub max_hp_percent: PenaltyFormula,
    /// Maximum action point reduction.
    pub max_ap_percent: PenaltyFormula,
    /// Resolve dice reduction.
    pub resolve_dice: PenaltyFormula,
}

/// One penalty expressed as a formula over current corruption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PenaltyFormula {
    /// The formula text, e.g. `floor(corruption / 10) * 5`.
    pub formula: String,
    /// What the formula computes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
