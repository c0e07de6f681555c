//! Flavor-text descriptor configuration: galdr casting, miscasts, outcomes,
//! weapon arts, and skill usage, grouped into named pools.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root of an ability-descriptor configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorConfig {
    /// Configuration format version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    /// Content category this file belongs to.
    pub category: DescriptorCategory,
    /// Named descriptor pools; pool names are snake_case.
    pub pools: BTreeMap<String, Vec<Descriptor>>,
}

impl DescriptorConfig {
    /// Total descriptor count across all pools.
    pub fn descriptor_count(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// Looks up a pool by name.
    pub fn pool(&self, name: &str) -> Option<&[Descriptor]> {
        self.pools.get(name).map(Vec::as_slice)
    }
}

/// Descriptor file categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptorCategory {
    /// Casting-sequence flavor text.
    #[serde(rename = "galdr-actions")]
    GaldrActions,
    /// Sensory manifestation effects.
    #[serde(rename = "galdr-manifestations")]
    GaldrManifestations,
    /// Ability outcome narratives.
    #[serde(rename = "galdr-outcomes")]
    GaldrOutcomes,
    /// Magical failure narratives.
    #[serde(rename = "galdr-miscasts")]
    GaldrMiscasts,
    /// Combat ability flavor text.
    #[serde(rename = "weapon-arts")]
    WeaponArts,
    /// Skill action flavor text.
    #[serde(rename = "skill-usage")]
    SkillUsage,
}

/// One pool entry. The wire format discriminates by which required fields
/// are present, so the typed projection is an untagged union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Descriptor {
    /// Magical failure narrative with mechanical consequences.
    Miscast(MiscastDescriptor),
    /// Casting-sequence flavor text.
    GaldrAction(GaldrActionDescriptor),
    /// Sensory manifestation of an active effect.
    Manifestation(ManifestationDescriptor),
    /// Combat ability flavor text.
    WeaponArt(WeaponArtDescriptor),
    /// Skill action flavor text.
    SkillUsage(SkillUsageDescriptor),
    /// Ability outcome narrative.
    Outcome(OutcomeDescriptor),
}

impl Descriptor {
    /// Stable descriptor id, regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            Descriptor::Miscast(d) => &d.id,
            Descriptor::GaldrAction(d) => &d.id,
            Descriptor::Manifestation(d) => &d.id,
            Descriptor::WeaponArt(d) => &d.id,
            Descriptor::SkillUsage(d) => &d.id,
            Descriptor::Outcome(d) => &d.id,
        }
    }

    /// Flavor text template, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            Descriptor::Miscast(d) => &d.text,
            Descriptor::GaldrAction(d) => &d.text,
            Descriptor::Manifestation(d) => &d.text,
            Descriptor::WeaponArt(d) => &d.text,
            Descriptor::SkillUsage(d) => &d.text,
            Descriptor::Outcome(d) => &d.text,
        }
    }
}

/// Casting-sequence flavor text record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GaldrActionDescriptor {
    /// Snake_case descriptor id.
    pub id: String,
    /// Flavor text, may contain `{Variable}` placeholders.
    pub text: String,
    /// Selection weight within the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Which casting phase this text narrates.
    pub action_type: ActionType,
    /// Rune school the text is written for; `None` means generic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rune_school: Option<RuneSchool>,
    /// Specific ability the text is written for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_name: Option<String>,
    /// Success level the text applies to; `None` means any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_level: Option<SuccessLevel>,
    /// Biome the text is flavored for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biome: Option<String>,
    /// Free-form selection tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Sensory manifestation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestationDescriptor {
    /// Snake_case descriptor id.
    pub id: String,
    /// Flavor text.
    pub text: String,
    /// Sense channel the manifestation is perceived through.
    pub manifestation_type: ManifestationType,
    /// Selection weight within the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Rune school; `None` means generic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rune_school: Option<RuneSchool>,
    /// Free-form selection tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Ability outcome narrative record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutcomeDescriptor {
    /// Snake_case descriptor id.
    pub id: String,
    /// Flavor text.
    pub text: String,
    /// Success level the outcome narrates.
    pub success_level: SuccessLevel,
    /// Selection weight within the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Rune school; `None` means generic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rune_school: Option<RuneSchool>,
    /// Specific ability the text is written for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_name: Option<String>,
    /// Free-form selection tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Magical failure narrative record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MiscastDescriptor {
    /// Snake_case descriptor id.
    pub id: String,
    /// Flavor text.
    pub text: String,
    /// Failure mode being narrated.
    pub miscast_type: MiscastType,
    /// How bad it gets.
    pub severity: MiscastSeverity,
    /// Selection weight within the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Rune school; `None` means generic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rune_school: Option<RuneSchool>,
    /// Corruption source id credited for the fallout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corruption_source: Option<String>,
    /// Optional mechanical consequences of the miscast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanical_effect: Option<MechanicalEffect>,
    /// Free-form selection tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Combat ability flavor text record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeaponArtDescriptor {
    /// Snake_case descriptor id.
    pub id: String,
    /// Flavor text, may reference `{Weapon}`.
    pub text: String,
    /// Broad ability classification.
    pub ability_category: AbilityCategory,
    /// Specific ability name.
    pub ability_name: String,
    /// Weapon family the text assumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<WeaponType>,
    /// Success level the text applies to; `None` means any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_level: Option<SuccessLevel>,
    /// Selection weight within the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Free-form selection tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Skill action flavor text record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillUsageDescriptor {
    /// Snake_case descriptor id.
    pub id: String,
    /// Flavor text.
    pub text: String,
    /// Skill the action exercises.
    pub skill_name: String,
    /// Success level the text applies to; `None` means any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_level: Option<SuccessLevel>,
    /// Selection weight within the pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Free-form selection tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Mechanical consequences attached to a miscast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MechanicalEffect {
    /// Damage dealt, in hit points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    /// Status effect applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Status duration, in rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Who the effect lands on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Corruption points gained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corruption: Option<u32>,
}

/// Casting phase narrated by a galdr action descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    /// Initial rune invocation.
    Invocation,
    /// Sustained chanting.
    Chant,
    /// The rune takes visible shape.
    RuneManifestation,
    /// Energy release.
    Discharge,
    /// Lingering after-effects.
    Aftermath,
    /// A held effect fires.
    EffectTrigger,
    /// An item or passive activates.
    Activation,
}

/// Sense channel for a manifestation descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManifestationType {
    /// Seen.
    Visual,
    /// Heard.
    Auditory,
    /// Felt on the skin or in the bones.
    Tactile,
    /// Smelled or tasted.
    Olfactory,
}

/// Magical failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscastType {
    /// The Blight seeps into the casting.
    BlightCorruption,
    /// Reality objects to the working.
    Paradox,
    /// The energy turns on the caster.
    Backlash,
    /// The spell simply dies.
    Fizzle,
    /// Uncontrolled surge.
    WildMagic,
    /// Alfheim bleed-through warps the effect.
    AlfheimDistortion,
    /// The rune inverts its own meaning.
    RunicInversion,
}

/// Miscast severity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscastSeverity {
    /// Cosmetic or trivial.
    Minor,
    /// Noticeable cost.
    Moderate,
    /// Real danger.
    Severe,
    /// Run.
    Catastrophic,
}

/// Broad non-galdr ability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityCategory {
    /// Weapon technique.
    WeaponArt,
    /// Battlefield maneuver.
    TacticalAbility,
    /// Protective technique.
    DefensiveAbility,
    /// Always-on effect.
    PassiveAbility,
    /// Resource-spending ability.
    ResourceAbility,
}

/// Weapon families referenced by weapon-art descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponType {
    /// Two-handed melee weapons.
    TwoHanded,
    /// One-handed melee weapons.
    OneHanded,
    /// Paired weapons.
    DualWield,
    /// Bows.
    Bow,
    /// Crossbows.
    Crossbow,
    /// Fists and improvised strikes.
    Unarmed,
    /// Shield techniques.
    Shield,
}

/// The 24 Elder Futhark rune schools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum RuneSchool {
    Fehu,
    Uruz,
    Thurisaz,
    Ansuz,
    Raido,
    Kenaz,
    Gebo,
    Wunjo,
    Hagalaz,
    Naudiz,
    Isa,
    Jera,
    Eihwaz,
    Perthro,
    Algiz,
    Sowilo,
    Tiwaz,
    Berkanan,
    Ehwaz,
    Mannaz,
    Laguz,
    Ingwaz,
    Dagaz,
    Othala,
}

/// Graded check results used across descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessLevel {
    /// Barely made it.
    MinorSuccess,
    /// Clean success.
    SolidSuccess,
    /// Beyond expectations.
    ExceptionalSuccess,
    /// Missed.
    Failure,
    /// Missed badly.
    CriticalFailure,
}
