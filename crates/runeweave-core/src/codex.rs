//! Codex configuration: discoverable lore entries, their sections and
//! unlock conditions, and collection progression defaults.

use serde::{Deserialize, Serialize};

/// Root of `codex.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodexConfig {
    /// Configuration format version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    /// Collection-wide progression defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_defaults: Option<ProgressionDefaults>,
    /// Entry grouping categories; never empty.
    pub categories: Vec<CodexCategory>,
    /// The entries themselves; may be empty while content is authored.
    pub entries: Vec<CodexEntry>,
}

impl CodexConfig {
    /// Looks up an entry by id.
    pub fn entry(&self, id: &str) -> Option<&CodexEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// An entry grouping category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodexCategory {
    /// Kebab-case category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the category covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// UI icon id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    /// Nested subcategories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<CodexSubcategory>,
}

/// A nested category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodexSubcategory {
    /// Kebab-case subcategory id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
}

/// One codex entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CodexEntry {
    /// Entry id of the form `codex-<topic>-<number>`.
    pub id: String,
    /// Owning category id.
    pub category_id: String,
    /// Owning subcategory id, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<String>,
    /// Display title.
    pub title: String,
    /// In-world era the entry documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<Era>,
    /// How unlock conditions combine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_logic: Option<ConditionLogic>,
    /// Conditions that reveal the entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unlock_conditions: Vec<UnlockCondition>,
    /// Progressive content sections; never empty.
    pub sections: Vec<EntrySection>,
    /// Links to other entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_entries: Vec<EntryRelation>,
}

/// In-world eras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Era {
    /// Before the Blight.
    PreBlight,
    /// During the Blight.
    Blight,
    /// After the Blight.
    PostBlight,
    /// Undatable.
    Unknown,
}

/// How multiple unlock conditions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionLogic {
    /// All conditions must hold.
    And,
    /// Any single condition suffices.
    Or,
}

/// A condition that reveals an entry. Parameter fields beyond `type` are
/// populated per kind; the schema allows only the matching ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnlockCondition {
    /// Condition kind.
    #[serde(rename = "type")]
    pub kind: UnlockConditionType,
    /// Capture id (`CaptureCollected`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_id: Option<String>,
    /// Minimum capture quality (`CaptureCollected`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quality: Option<u32>,
    /// Quest id (`QuestComplete`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_id: Option<String>,
    /// Enemy id (`EnemyKilled`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy_id: Option<String>,
    /// Kill count (`EnemyKilled`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Only boss variants count (`EnemyKilled`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss_only: Option<bool>,
    /// Location id (`LocationVisited`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    /// Item id (`ItemObtained`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Item quantity (`ItemObtained`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Faction id (`FactionReputation`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_id: Option<String>,
    /// Required standing (`FactionReputation`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing: Option<String>,
    /// Minimum level (`LevelReached`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    /// Story trigger id (`ManualUnlock`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_id: Option<String>,
    /// Editorial note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Unlock condition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockConditionType {
    /// A capture was collected.
    CaptureCollected,
    /// A quest was completed.
    QuestComplete,
    /// Enemies were slain.
    EnemyKilled,
    /// A location was visited.
    LocationVisited,
    /// An item was obtained.
    ItemObtained,
    /// A reputation standing was reached.
    FactionReputation,
    /// A character level was reached.
    LevelReached,
    /// Scripted story unlock.
    ManualUnlock,
}

/// One progressive content section of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntrySection {
    /// Section id of the form `section-<name>`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// The lore text itself.
    pub content: String,
    /// Collection progress in `[0, 1]` at which the section appears.
    pub unlock_threshold: f64,
    /// Capture kind that must back the section, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_requirement: Option<CaptureRequirement>,
    /// Spoiler grading for UI gating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoiler_level: Option<SpoilerLevel>,
}

/// Evidence kinds a section can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureRequirement {
    /// A recovered text fragment.
    TextFragment,
    /// An echo recording.
    EchoRecording,
    /// A visual record.
    VisualRecord,
    /// A physical specimen.
    Specimen,
    /// An oral history.
    OralHistory,
    /// A runic trace.
    RunicTrace,
}

/// Spoiler grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpoilerLevel {
    /// Safe everywhere.
    None,
    /// Mild plot detail.
    Minor,
    /// Major plot detail.
    Major,
}

/// A directed link between two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntryRelation {
    /// Target entry id.
    pub entry_id: String,
    /// How the entries relate.
    pub relation_type: EntryRelationType,
    /// Editorial note on the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Entry relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryRelationType {
    /// Worth reading together.
    SeeAlso,
    /// Read the target first.
    Prerequisite,
    /// Continues the target's story.
    Sequel,
    /// Disagrees with the target.
    Contradiction,
    /// Expands on the target.
    Expansion,
}

/// Collection-wide progression defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressionDefaults {
    /// The progression ladder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<ProgressionLevel>,
}

/// One rung of the collection progression ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressionLevel {
    /// Ladder rung name.
    pub level: ProgressionLevelName,
    /// Collection progress in `[0, 1]` at which the rung is reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// What the rung represents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rewards granted on reaching the rung.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewards: Vec<ProgressionReward>,
}

/// Progression ladder rungs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionLevelName {
    /// First scraps of knowledge.
    Fragment,
    /// A partial picture.
    Partial,
    /// The full picture.
    Complete,
    /// Every secret known.
    Mastery,
}

/// A reward granted by a progression rung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressionReward {
    /// Reward kind.
    #[serde(rename = "type")]
    pub kind: RewardType,
    /// Reward magnitude or id, kind-dependent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Reward kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardType {
    /// A legend page.
    Legend,
    /// An achievement.
    Achievement,
    /// A gameplay unlock.
    Unlock,
    /// An item.
    Item,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unlock_condition_carries_kind_specific_fields() {
        let condition: UnlockCondition = serde_json::from_value(json!({
            "type": "EnemyKilled",
            "enemyId": "hollow-stalker",
            "count": 5,
            "bossOnly": false
        }))
        .expect("condition should deserialize");
        assert_eq!(condition.kind, UnlockConditionType::EnemyKilled);
        assert_eq!(condition.count, Some(5));
        assert!(condition.quest_id.is_none());
    }

    #[test]
    fn era_uses_kebab_case_wire_names() {
        assert!(serde_json::from_value::<Era>(json!("pre-blight")).is_ok());
        assert!(serde_json::from_value::<Era>(json!("PreBlight")).is_err());
    }

    #[test]
    fn entry_lookup_by_id() {
        let config: CodexConfig = serde_json::from_value(json!({
            "version": "1.0.0",
            "categories": [{ "id": "lore", "name": "Lore" }],
            "entries": [{
                "id": "codex-blight-001",
                "categoryId": "lore",
                "title": "The First Bloom",
                "sections": [{
                    "id": "section-overview",
                    "title": "Overview",
                    "content": "Where the Blight first took root.",
                    "unlockThreshold": 0.0
                }]
            }]
        }))
        .expect("config should deserialize");
        assert!(config.entry("codex-blight-001").is_some());
        assert!(config.entry("codex-blight-002").is_none());
    }
}
