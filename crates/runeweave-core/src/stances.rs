//! Combat stance configuration: stat trade-offs, ability grants and
//! restrictions, switching rules, and AI selection behavior.

use serde::{Deserialize, Serialize};

/// Root of `stances.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StancesConfig {
    /// Configuration format version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    /// Id of the stance characters start in.
    pub default_stance: String,
    /// Switching rules applied when a stance declares none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_switching_rules: Option<SwitchingRule>,
    /// All stances; never empty.
    pub stances: Vec<CombatStance>,
}

impl StancesConfig {
    /// Looks up a stance by id.
    pub fn stance(&self, id: &str) -> Option<&CombatStance> {
        self.stances.iter().find(|s| s.id == id)
    }
}

/// One combat stance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CombatStance {
    /// Kebab-case stance id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the stance trades away and for what.
    pub description: String,
    /// Stat adjustments while the stance is active.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stat_modifiers: Vec<StatModifier>,
    /// Ability ids usable only in this stance.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ability_grants: Vec<String>,
    /// Abilities locked out while the stance is active.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ability_restrictions: Vec<AbilityRestriction>,
    /// Stances that cannot be entered directly from this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incompatible_stances: Vec<String>,
    /// Stance-specific switching rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switching_rule: Option<SwitchingRule>,
    /// How AI combatants weigh this stance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_behavior: Option<AiBehavior>,
    /// Visual effect id played on entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_effect_id: Option<String>,
    /// Sound effect id played on entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_effect_id: Option<String>,
    /// Whether this is the fallback stance.
    #[serde(default)]
    pub is_default: bool,
    /// Whether the stance must be unlocked first.
    #[serde(default)]
    pub requires_unlock: bool,
    /// How the stance unlocks, when `requires_unlock` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_condition: Option<UnlockCondition>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    /// Six-digit hex accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// UI icon id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
}

/// One stat adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatModifier {
    /// The adjusted stat.
    pub stat: StanceStat,
    /// Magnitude; negative values are penalties.
    pub value: f64,
    /// Flat amount or percentage.
    #[serde(rename = "type")]
    pub kind: ModifierKind,
    /// Player-facing explanation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Stats a stance can adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StanceStat {
    /// Outgoing damage.
    Attack,
    /// Incoming damage mitigation.
    Defense,
    /// Turn order weight.
    Speed,
    /// To-hit chance.
    Accuracy,
    /// Dodge chance.
    Evasion,
    /// Critical hit chance.
    CriticalChance,
    /// Critical hit damage.
    CriticalDamage,
    /// Flat damage reduction.
    DamageReduction,
}

/// Flat or percentage adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    /// Additive flat amount.
    Flat,
    /// Percentage of the base stat.
    Percentage,
}

/// An ability lockout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AbilityRestriction {
    /// How the target is matched.
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    /// Category name, ability id, or tag, depending on the kind.
    pub target: String,
    /// Why the lockout exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Restriction matching modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestrictionKind {
    /// Match a whole ability category.
    Category,
    /// Match one ability id.
    Specific,
    /// Match an ability tag.
    Tag,
}

/// When and how a stance switch is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchingRule {
    /// Action economy cost of the switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_cost: Option<ActionCost>,
    /// Turns before switching again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    /// Whether reaction switches are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_switch_during_enemy_turn: Option<bool>,
    /// Preconditions for the switch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<SwitchCondition>,
    /// Effects fired when the switch resolves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trigger_effects: Vec<TriggerEffect>,
}

/// Action economy costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCost {
    /// No action spent.
    Free,
    /// A swift action.
    Swift,
    /// A standard action.
    Standard,
    /// The whole turn.
    Full,
}

/// A precondition for switching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchCondition {
    /// Condition kind.
    #[serde(rename = "type")]
    pub kind: SwitchConditionType,
    /// Threshold, status id, or turn number, kind-dependent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Switch precondition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchConditionType {
    /// Health above a percentage.
    HealthAbove,
    /// Health below a percentage.
    HealthBelow,
    /// A status effect is active.
    HasStatus,
    /// A status effect is absent.
    NotHasStatus,
    /// Combat is running.
    InCombat,
    /// Combat is not running.
    OutOfCombat,
    /// A specific turn has been reached.
    TurnNumber,
}

/// An effect fired on a successful switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TriggerEffect {
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: TriggerEffectType,
    /// Who the effect lands on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Amount or status id, kind-dependent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Effect duration, in rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Switch trigger effect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerEffectType {
    /// Restore hit points.
    Heal,
    /// Deal damage.
    Damage,
    /// Apply a status.
    ApplyStatus,
    /// Remove a status.
    RemoveStatus,
    /// Apply a buff.
    Buff,
    /// Apply a debuff.
    Debuff,
}

/// How AI combatants weigh a stance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiBehavior {
    /// Base selection priority, 0 to 100.
    pub priority: u32,
    /// Conditions that make the stance attractive; never empty.
    pub use_when: Vec<AiCondition>,
    /// Conditions that rule the stance out.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_when: Vec<AiCondition>,
    /// Reluctance to leave the stance once entered, in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stickiness: Option<f64>,
}

/// One AI stance-selection condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiCondition {
    /// Condition kind.
    #[serde(rename = "type")]
    pub kind: AiConditionType,
    /// Threshold or id, kind-dependent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Relative weight of this condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// AI stance-selection condition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiConditionType {
    /// Own health below a percentage.
    HealthBelow,
    /// Own health above a percentage.
    HealthAbove,
    /// Enemy head-count comparison.
    EnemyCount,
    /// Ally head-count comparison.
    AllyCount,
    /// A status effect is active.
    StatusActive,
    /// The target looks vulnerable.
    TargetWeak,
    /// More enemies than allies.
    OutNumbered,
}

/// How a locked stance is earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnlockCondition {
    /// Unlock kind.
    #[serde(rename = "type")]
    pub kind: UnlockKind,
    /// Level, quest id, skill id, item id, or achievement id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Player-facing requirement text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Stance unlock kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockKind {
    /// Reach a character level.
    Level,
    /// Complete a quest.
    Quest,
    /// Train a skill.
    Skill,
    /// Possess an item.
    Item,
    /// Earn an achievement.
    Achievement,
}
