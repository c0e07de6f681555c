//! Glossary configuration: term categories, definitions, cross-references,
//! and per-context display rules.

use serde::{Deserialize, Serialize};

/// Root of `glossary.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlossaryConfig {
    /// Configuration format version (`MAJOR.MINOR.PATCH`).
    pub version: String,
    /// Term grouping categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<TermCategory>,
    /// Display rules applied when a term declares none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_display_rules: Vec<DisplayRule>,
    /// The terms themselves; never empty.
    pub terms: Vec<GlossaryTerm>,
}

impl GlossaryConfig {
    /// Looks up a term by id.
    pub fn term(&self, id: &str) -> Option<&GlossaryTerm> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// All terms in a category, in file order.
    pub fn terms_in_category<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a GlossaryTerm> {
        self.terms.iter().filter(move |t| t.category_id == category_id)
    }
}

/// A term grouping category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TermCategory {
    /// Kebab-case category id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// What the category covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// UI icon id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    /// Six-digit hex accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One glossary term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GlossaryTerm {
    /// Kebab-case term id.
    pub id: String,
    /// The term as displayed.
    pub term: String,
    /// Full definition.
    pub definition: String,
    /// Condensed definition for tight UI contexts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_definition: Option<String>,
    /// Owning category id.
    pub category_id: String,
    /// Short form, at most eight characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    /// Alternative spellings and slang.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Links to other terms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_references: Vec<CrossReference>,
    /// Per-context display overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_rules: Vec<DisplayRule>,
    /// Usage examples.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Localization catalog key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization_key: Option<String>,
    /// Display ordering within the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Whether the term names a rules mechanic rather than lore.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_game_mechanics: Option<bool>,
    /// Where the player first meets the term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_appearance: Option<String>,
}

/// A directed link between two terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CrossReference {
    /// Target term id.
    pub term_id: String,
    /// How the terms relate.
    pub relationship: CrossReferenceType,
    /// Editorial note on the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Cross-reference relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossReferenceType {
    /// Worth reading together.
    SeeAlso,
    /// Deliberately contrasted concepts.
    Contrast,
    /// Understand the target first.
    Prerequisite,
    /// Loosely related.
    Related,
}

/// Where a term can be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayContext {
    /// Hover tooltip.
    Tooltip,
    /// Help screens.
    Help,
    /// Codex pages.
    Codex,
    /// Combat log.
    Combat,
    /// Inventory views.
    Inventory,
}

/// How a term renders in one context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DisplayRule {
    /// The context the rule applies to.
    pub context: DisplayContext,
    /// Show the full definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_definition: Option<bool>,
    /// Show usage examples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_examples: Option<bool>,
    /// Character budget; at least ten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Highlight occurrences inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_in_text: Option<bool>,
    /// Prefer the abbreviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_abbreviation: Option<bool>,
    /// Show cross-references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_cross_references: Option<bool>,
}
