//! Dialogue tree configuration. Unlike the other categories, dialogue files
//! are a root-level ARRAY of nodes and keep the original PascalCase wire
//! property names.

use serde::{Deserialize, Serialize};

/// One node of a dialogue tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DialogueNode {
    /// Snake_case node id, unique within the file.
    pub id: String,
    /// The NPC line.
    pub text: String,
    /// Player responses; never empty.
    pub options: Vec<DialogueOption>,
    /// Whether choosing into this node ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_conversation: Option<bool>,
    /// Visibility conditions for the node.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<DialogueCondition>,
}

/// One player response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DialogueOption {
    /// The response line, optionally prefixed `[WILL 4]` style.
    pub text: String,
    /// Node the response leads to; `None` ends the conversation.
    pub next_node_id: Option<String>,
    /// Gate the response behind an attribute or skill check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_check: Option<SkillCheck>,
    /// Side effect of choosing the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<DialogueOutcome>,
    /// Visibility conditions for the response.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<DialogueCondition>,
}

/// An attribute or skill gate on a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SkillCheck {
    /// Tested attribute; empty when the check is skill-only.
    pub attribute: DialogueAttribute,
    /// Attribute value to meet or beat.
    pub target_value: u32,
    /// Named skill tested instead of (or alongside) the attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    /// Skill ranks required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_ranks: Option<u32>,
}

/// The four tested attributes, plus the empty marker for skill-only checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueAttribute {
    /// Raw strength.
    #[serde(rename = "might")]
    Might,
    /// Dexterity and poise.
    #[serde(rename = "finesse")]
    Finesse,
    /// Mental fortitude.
    #[serde(rename = "will")]
    Will,
    /// Sharpness of mind.
    #[serde(rename = "wits")]
    Wits,
    /// No attribute; the check is skill-only.
    #[serde(rename = "")]
    None,
}

/// Side effect of choosing a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DialogueOutcome {
    /// Outcome kind.
    #[serde(rename = "Type")]
    pub kind: OutcomeType,
    /// Kind-dependent payload (quest id, item id, flag name, ...).
    pub data: String,
    /// Reputation delta applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation_change: Option<i32>,
    /// Faction receiving the reputation delta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_faction: Option<String>,
}

/// Dialogue outcome kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeType {
    /// Combat starts.
    InitiateCombat,
    /// Reputation shifts.
    ReputationChange,
    /// Information is revealed.
    Information,
    /// The conversation ends.
    EndConversation,
    /// A quest is offered.
    QuestGiven,
    /// A quest advances.
    QuestUpdate,
    /// The player gives an item.
    ItemGiven,
    /// The player receives an item.
    ItemReceived,
    /// An item is taken from the player.
    ItemTaken,
    /// A story flag is set.
    FlagSet,
}

/// A visibility condition on a node or response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DialogueCondition {
    /// Condition kind.
    #[serde(rename = "Type")]
    pub kind: ConditionType,
    /// What is inspected (item id, faction, quest id, flag, skill).
    pub target: String,
    /// Value compared against.
    pub value: serde_json::Value,
    /// Comparison operator.
    pub operator: ConditionOperator,
}

/// Dialogue condition kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    /// Inventory contains an item.
    HasItem,
    /// Reputation with a faction.
    HasReputation,
    /// A quest is in a given state.
    HasQuestState,
    /// A story flag is set.
    HasFlag,
    /// A skill is at a given level.
    SkillLevel,
}

/// Comparison operators for conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    /// Equal.
    Equals,
    /// Not equal.
    NotEquals,
    /// Strictly greater.
    GreaterThan,
    /// Strictly less.
    LessThan,
    /// Greater or equal.
    GreaterThanOrEquals,
    /// Less or equal.
    LessThanOrEquals,
}

/// Returns the ids of nodes referenced by options but not defined in `nodes`.
pub fn dangling_references(nodes: &[DialogueNode]) -> Vec<String> {
    let defined: std::collections::BTreeSet<&str> =
        nodes.iter().map(|n| n.id.as_str()).collect();

    let mut missing = Vec::new();
    for node in nodes {
        for option in &node.options {
            if let Some(target) = option.next_node_id.as_deref() {
                if !defined.contains(target) && !missing.iter().any(|m| m == target) {
                    missing.push(target.to_string());
                }
            }
        }
    }
    missing
}
