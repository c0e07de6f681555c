//! Dice definitions and dice mechanics configuration.

use serde::{Deserialize, Serialize};

/// Root of `dice-types.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiceTypesConfig {
    /// Configuration format version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Available die definitions; never empty.
    pub die_types: Vec<DieType>,
    /// Documentation of the canonical dice-expression grammar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression_pattern: Option<DiceExpressionPattern>,
}

impl DiceTypesConfig {
    /// Looks up a die by its id (`d6`, `d20`, ...).
    pub fn die(&self, id: &str) -> Option<&DieType> {
        self.die_types.iter().find(|d| d.id == id)
    }
}

/// One die definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DieType {
    /// Die id, lowercase `d` followed by the face count.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Face count; 2 is the coin-flip minimum.
    pub faces: u32,
    /// Lowest rollable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i32>,
    /// Highest rollable value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i32>,
    /// Statistical mean of one roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    /// Whether this die belongs to the standard seven-die set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_standard: Option<bool>,
    /// Display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    /// Six-digit hex display color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// UI icon id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Flavor description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Dice-expression grammar documentation shipped with the die set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiceExpressionPattern {
    /// The regular expression itself.
    pub pattern: String,
    /// What each capture group means.
    #[serde(default)]
    pub capture_groups: Vec<String>,
    /// Worked examples.
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Root of `dice-mechanics.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiceMechanicsConfig {
    /// Configuration format version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Critical hit/failure thresholds.
    pub critical_thresholds: CriticalThresholds,
    /// Default expressions per roll kind.
    pub default_dice: DefaultDice,
    /// Advantage/disadvantage handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantage_rules: Option<AdvantageRules>,
    /// Exploding dice handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exploding_dice: Option<ExplodingDiceRules>,
    /// Keep-highest/lowest handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_rules: Option<KeepRules>,
    /// Reroll handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reroll_rules: Option<RerollRules>,
    /// Named difficulty classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub difficulty_classes: Vec<DifficultyClass>,
}

/// Critical thresholds; all fields optional, empty object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CriticalThresholds {
    /// Natural roll at or below which a critical failure triggers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_min: Option<u32>,
    /// Natural roll at which a critical success triggers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_max: Option<NaturalMax>,
    /// Damage multiplier on a critical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_multiplier: Option<f64>,
    /// Bonus dice expression rolled on a critical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_bonus_dice: Option<String>,
}

/// Either a literal face value or the die's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NaturalMax {
    /// A specific face value.
    Value(u32),
    /// The literal string `"max"`.
    Max(MaxKeyword),
}

/// The keyword form of [`NaturalMax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxKeyword {
    /// Always the die's highest face.
    #[serde(rename = "max")]
    Max,
}

/// Default dice expressions per roll kind; empty object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultDice {
    /// Skill check expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_check: Option<String>,
    /// Attack roll expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_roll: Option<String>,
    /// Saving throw expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_roll: Option<String>,
    /// Damage roll expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_roll: Option<String>,
    /// Initiative roll expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiative_roll: Option<String>,
    /// Healing roll expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing_roll: Option<String>,
}

/// Advantage/disadvantage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdvantageRules {
    /// Which die survives an advantage roll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantage_keep: Option<AdvantageKeep>,
    /// How many dice are rolled under advantage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantage_dice: Option<u32>,
}

/// Which die an advantage roll keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvantageKeep {
    /// Keep the best result.
    Highest,
    /// Keep the worst result (disadvantage).
    Lowest,
}

/// Exploding dice configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExplodingDiceRules {
    /// Whether dice explode at all.
    pub enabled: bool,
    /// Explosion chain cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_explosions: Option<u32>,
    /// What face triggers an explosion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explode_on: Option<ExplodeOn>,
    /// Die ids the rule applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applies_to_types: Vec<String>,
}

/// Explosion trigger modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplodeOn {
    /// Only the maximum face explodes.
    Max,
    /// Any face at or above a threshold explodes.
    Threshold,
}

/// Keep-highest/lowest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeepRules {
    /// Keep this many highest dice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_highest: Option<u32>,
    /// Keep this many lowest dice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_lowest: Option<u32>,
}

/// Reroll configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RerollRules {
    /// Reroll any die at or below this face.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reroll_below: Option<u32>,
    /// Reroll chain cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rerolls: Option<u32>,
}

/// One named difficulty class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DifficultyClass {
    /// Kebab-case id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Target number.
    pub dc: u32,
    /// Display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    /// Flavor description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
