//! Faction configuration: identities, reputation thresholds, inter-faction
//! relationships, reputation modifiers, perks, and vendor access.

use serde::{Deserialize, Serialize};

/// Root of `factions.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FactionsConfig {
    /// Configuration format version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    /// Reputation tier ranges applied when a faction declares none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_thresholds: Option<ReputationThresholds>,
    /// All factions; never empty.
    pub factions: Vec<Faction>,
}

impl FactionsConfig {
    /// Looks up a faction by id.
    pub fn faction(&self, id: &str) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id == id)
    }
}

/// One faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Faction {
    /// Kebab-case faction id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Flavor description, at least ten characters.
    pub description: String,
    /// Stances toward other factions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<FactionRelationship>,
    /// Reputation-changing player actions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reputation_modifiers: Vec<ReputationModifier>,
    /// Perks granted at reputation tiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perks: Vec<FactionPerk>,
    /// Vendor access gated by reputation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendors: Vec<VendorAccess>,
    /// Six-digit hex banner color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// UI icon id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Hidden until discovered in play.
    #[serde(default)]
    pub is_hidden: bool,
}

/// The six reputation tier ranges; all tiers must be declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReputationThresholds {
    /// Attack-on-sight range.
    pub hostile: ThresholdRange,
    /// Distrusted range.
    pub unfriendly: ThresholdRange,
    /// Indifferent range.
    pub neutral: ThresholdRange,
    /// Welcomed range.
    pub friendly: ThresholdRange,
    /// Trusted range.
    pub allied: ThresholdRange,
    /// Revered range.
    pub exalted: ThresholdRange,
}

/// One reputation tier's inclusive score range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThresholdRange {
    /// Inclusive lower bound.
    pub min: i32,
    /// Inclusive upper bound.
    pub max: i32,
    /// Display label.
    pub label: String,
}

/// A faction's stance toward another faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FactionRelationship {
    /// Target faction id.
    pub faction_id: String,
    /// The stance itself.
    pub relationship: RelationshipType,
    /// Fraction of reputation changes mirrored onto the target faction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation_link: Option<i32>,
    /// Why the stance exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Inter-faction stances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipType {
    /// Sworn allies.
    Allied,
    /// On good terms.
    Friendly,
    /// No strong feelings.
    Neutral,
    /// On bad terms.
    Unfriendly,
    /// Open animosity.
    Hostile,
    /// Active warfare.
    AtWar,
}

/// One reputation-changing player action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReputationModifier {
    /// The action kind.
    pub action: ReputationAction,
    /// Reputation delta.
    pub amount: i32,
    /// What the action covers.
    pub description: String,
    /// Situational scaling of the delta.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ModifierCondition>,
}

/// Player actions factions react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReputationAction {
    /// Killing a member.
    KillMember,
    /// Aiding a member.
    HelpMember,
    /// Completing a faction quest.
    CompleteQuest,
    /// Failing a faction quest.
    FailQuest,
    /// Stealing from the faction.
    Theft,
    /// Gifting goods.
    Gift,
    /// Breaking a sworn agreement.
    Betrayal,
    /// Uncovering something the faction values.
    Discovery,
}

/// Situational scaling applied to a reputation modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModifierCondition {
    /// The circumstance.
    #[serde(rename = "type")]
    pub kind: ModifierConditionType,
    /// Multiplier applied to the base amount.
    pub modifier: f64,
}

/// Circumstances that scale a reputation change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierConditionType {
    /// Someone saw it happen.
    Witnessed,
    /// Nobody saw it happen.
    Unwitnessed,
}

/// A perk granted at a reputation tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FactionPerk {
    /// Kebab-case perk id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the perk does, in prose.
    pub description: String,
    /// Tier at which the perk unlocks; positive tiers only.
    pub required_threshold: PerkThreshold,
    /// The mechanical effect.
    pub effect: PerkEffect,
}

/// Tiers a perk can require (earned standing only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerkThreshold {
    /// Welcomed.
    Friendly,
    /// Trusted.
    Allied,
    /// Revered.
    Exalted,
}

/// A perk's mechanical effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PerkEffect {
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: PerkEffectType,
    /// What the effect applies to.
    pub target: String,
    /// Magnitude; sign and unit depend on the kind.
    pub value: f64,
}

/// Perk effect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerkEffectType {
    /// Vendor price scaling.
    PriceModifier,
    /// Flat stat bonus.
    StatBonus,
    /// Access to a gated area or service.
    AccessGrant,
    /// A new ability.
    AbilityGrant,
    /// Faster reputation gain.
    ReputationBonus,
}

/// Vendor access gated by reputation tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VendorAccess {
    /// Vendor id.
    pub vendor_id: String,
    /// Minimum tier to trade at all.
    pub required_threshold: ReputationTier,
    /// Price multiplier at this vendor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_modifier: Option<f64>,
    /// Item ids only this faction sells.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusive_items: Vec<String>,
}

/// The full reputation tier ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationTier {
    /// Attack on sight.
    Hostile,
    /// Distrusted.
    Unfriendly,
    /// Indifferent.
    Neutral,
    /// Welcomed.
    Friendly,
    /// Trusted.
    Allied,
    /// Revered.
    Exalted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relationship_enum_is_case_sensitive() {
        assert!(serde_json::from_value::<RelationshipType>(json!("Allied")).is_ok());
        assert!(serde_json::from_value::<RelationshipType>(json!("allied")).is_err());
        assert!(serde_json::from_value::<RelationshipType>(json!("Enemy")).is_err());
    }

    #[test]
    fn perk_threshold_excludes_neutral() {
        assert!(serde_json::from_value::<PerkThreshold>(json!("friendly")).is_ok());
        assert!(serde_json::from_value::<PerkThreshold>(json!("neutral")).is_err());
    }

    #[test]
    fn faction_lookup_by_id() {
        let config: FactionsConfig = serde_json::from_value(json!({
            "version": "1.0.0",
            "factions": [
                {
                    "id": "rust-clans",
                    "name": "The Rust Clans",
                    "description": "Scavenger clans of the deep ruins.",
                    "relationships": [
                        { "factionId": "midgard-combine", "relationship": "Unfriendly" }
                    ]
                }
            ]
        }))
        .expect("config should deserialize");

        let clans = config.faction("rust-clans").expect("faction should exist");
        assert_eq!(
            clans.relationships[0].relationship,
            RelationshipType::Unfriendly
        );
    }
}
