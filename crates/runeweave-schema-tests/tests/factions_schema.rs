//! Validates factions.schema.json: identities, reputation thresholds,
//! relationships, reputation modifiers, perks, and vendor access.

mod common;

use common::{assert_invalid, assert_valid, config_dir, config_text, schema};
use runeweave_core::factions::RelationshipType;
use runeweave_loader::ConfigLoader;

fn faction_payload(faction_fields: &str) -> String {
    format!(
        r#"{{
            "version": "1.0.0",
            "factions": [
                {{
                    "id": "test-faction",
                    "name": "Test Faction",
                    "description": "A test faction for validation purposes."{faction_fields}
                }}
            ]
        }}"#
    )
}

#[test]
fn schema_loads_with_all_eight_definitions() {
    let document = schema("factions.schema.json");
    assert_eq!(document.title(), Some("Faction Configuration"));
    assert_eq!(document.definition_count(), 8);
    for name in [
        "Faction",
        "ReputationThresholds",
        "ThresholdRange",
        "FactionRelationship",
        "ReputationModifier",
        "ModifierCondition",
        "FactionPerk",
        "VendorAccess",
    ] {
        assert!(document.definition(name).is_some(), "should define {name}");
    }
}

#[test]
fn shipped_factions_pass_validation() {
    let document = schema("factions.schema.json");
    assert_valid(
        &document,
        &config_text("factions.json"),
        "shipped factions.json should validate",
    );
}

#[test]
fn faction_ids_must_be_kebab_case() {
    let document = schema("factions.schema.json");
    for id in ["rust-clans", "midgard-combine", "iron-banes", "dvergr-guild", "a1"] {
        let payload = faction_payload("").replace("test-faction", id);
        assert_valid(&document, &payload, &format!("faction id '{id}' should validate"));
    }
    for id in ["RustClans", "rust_clans"] {
        let payload = faction_payload("").replace("test-faction", id);
        assert_invalid(&document, &payload, &format!("faction id '{id}' should fail"));
    }
}

#[test]
fn identity_text_lengths_are_enforced() {
    let document = schema("factions.schema.json");
    assert_invalid(
        &document,
        &faction_payload("").replace("Test Faction", ""),
        "empty faction name should fail",
    );
    assert_invalid(
        &document,
        &faction_payload("").replace("A test faction for validation purposes.", "Short"),
        "five-character description should fail (minLength 10)",
    );
}

#[test]
fn default_thresholds_require_all_six_tiers() {
    let document = schema("factions.schema.json");
    let all_tiers = r#"{
        "version": "1.0.0",
        "defaultThresholds": {
            "hostile": { "min": -1000, "max": -501, "label": "Hostile" },
            "unfriendly": { "min": -500, "max": -1, "label": "Unfriendly" },
            "neutral": { "min": 0, "max": 499, "label": "Neutral" },
            "friendly": { "min": 500, "max": 2999, "label": "Friendly" },
            "allied": { "min": 3000, "max": 8999, "label": "Allied" },
            "exalted": { "min": 9000, "max": 10000, "label": "Exalted" }
        },
        "factions": [
            { "id": "test-faction", "name": "Test Faction", "description": "A test faction for validation purposes." }
        ]
    }"#;
    assert_valid(&document, all_tiers, "all six tiers should validate");

    let missing_allied = all_tiers.replace(
        r#""allied": { "min": 3000, "max": 8999, "label": "Allied" },
            "#,
        "",
    );
    assert_invalid(&document, &missing_allied, "missing 'allied' tier should fail");

    let empty_label = all_tiers.replace(r#""label": "Hostile""#, r#""label": """#);
    assert_invalid(&document, &empty_label, "empty tier label should fail");
}

#[test]
fn relationship_enum_is_closed_and_case_sensitive() {
    let document = schema("factions.schema.json");
    for relationship in ["Allied", "Friendly", "Neutral", "Unfriendly", "Hostile", "AtWar"] {
        let payload = faction_payload(&format!(
            r#",
            "relationships": [
                {{ "factionId": "other-faction", "relationship": "{relationship}" }}
            ]"#
        ));
        assert_valid(&document, &payload, &format!("relationship '{relationship}' should validate"));
    }
    for relationship in ["Enemy", "allied"] {
        let payload = faction_payload(&format!(
            r#",
            "relationships": [
                {{ "factionId": "other-faction", "relationship": "{relationship}" }}
            ]"#
        ));
        assert_invalid(&document, &payload, &format!("relationship '{relationship}' should fail"));
    }
}

#[test]
fn relationship_with_reputation_link_passes() {
    let document = schema("factions.schema.json");
    assert_valid(
        &document,
        &faction_payload(
            r#",
            "relationships": [
                {
                    "factionId": "other-faction",
                    "relationship": "Friendly",
                    "reputationLink": 50,
                    "description": "Trade partners"
                }
            ]"#,
        ),
        "relationship with reputationLink should validate",
    );
}

#[test]
fn reputation_modifier_constraints_hold() {
    let document = schema("factions.schema.json");
    for action in [
        "KillMember",
        "HelpMember",
        "CompleteQuest",
        "FailQuest",
        "Theft",
        "Gift",
        "Betrayal",
        "Discovery",
    ] {
        let payload = faction_payload(&format!(
            r#",
            "reputationModifiers": [
                {{ "action": "{action}", "amount": 10, "description": "Test action description here" }}
            ]"#
        ));
        assert_valid(&document, &payload, &format!("action '{action}' should validate"));
    }

    assert_invalid(
        &document,
        &faction_payload(
            r#",
            "reputationModifiers": [
                { "action": "InvalidAction", "amount": 10, "description": "Test action description here" }
            ]"#,
        ),
        "action 'InvalidAction' should fail",
    );
    assert_invalid(
        &document,
        &faction_payload(
            r#",
            "reputationModifiers": [
                { "action": "KillMember", "description": "Killing a faction member" }
            ]"#,
        ),
        "modifier missing amount should fail",
    );
    assert_invalid(
        &document,
        &faction_payload(
            r#",
            "reputationModifiers": [
                { "action": "KillMember", "amount": -20 }
            ]"#,
        ),
        "modifier missing description should fail",
    );
    assert_valid(
        &document,
        &faction_payload(
            r#",
            "reputationModifiers": [
                {
                    "action": "KillMember",
                    "amount": -20,
                    "conditions": [
                        { "type": "Witnessed", "modifier": 1.0 },
                        { "type": "Unwitnessed", "modifier": 0.0 }
                    ],
                    "description": "Killing a faction member"
                }
            ]"#,
        ),
        "modifier with witness conditions should validate",
    );
}

#[test]
fn perk_thresholds_exclude_unearned_standing() {
    let document = schema("factions.schema.json");
    let perk = |threshold: &str| {
        faction_payload(&format!(
            r#",
            "perks": [
                {{
                    "id": "test-perk",
                    "name": "Test Perk",
                    "description": "A test perk for validation purposes.",
                    "requiredThreshold": "{threshold}",
                    "effect": {{ "type": "PriceModifier", "target": "FactionVendors", "value": -0.15 }}
                }}
            ]"#
        ))
    };
    for threshold in ["friendly", "allied", "exalted"] {
        assert_valid(&document, &perk(threshold), &format!("perk threshold '{threshold}' should validate"));
    }
    assert_invalid(&document, &perk("neutral"), "perk threshold 'neutral' should fail");
}

#[test]
fn perk_effect_is_required_and_typed() {
    let document = schema("factions.schema.json");
    assert_invalid(
        &document,
        &faction_payload(
            r#",
            "perks": [
                {
                    "id": "test-perk",
                    "name": "Test Perk",
                    "description": "A test perk for validation purposes.",
                    "requiredThreshold": "friendly"
                }
            ]"#,
        ),
        "perk missing effect should fail",
    );

    let effect = |effect_type: &str| {
        faction_payload(&format!(
            r#",
            "perks": [
                {{
                    "id": "test-perk",
                    "name": "Test Perk",
                    "description": "A test perk for validation purposes.",
                    "requiredThreshold": "friendly",
                    "effect": {{ "type": "{effect_type}", "target": "TestTarget", "value": 10 }}
                }}
            ]"#
        ))
    };
    for effect_type in ["PriceModifier", "StatBonus", "AccessGrant", "AbilityGrant", "ReputationBonus"] {
        assert_valid(&document, &effect(effect_type), &format!("effect '{effect_type}' should validate"));
    }
    assert_invalid(&document, &effect("InvalidType"), "effect 'InvalidType' should fail");
}

#[test]
fn vendor_access_accepts_every_tier() {
    let document = schema("factions.schema.json");
    for threshold in ["hostile", "unfriendly", "neutral", "friendly", "allied", "exalted"] {
        let payload = faction_payload(&format!(
            r#",
            "vendors": [
                {{ "vendorId": "test-vendor", "requiredThreshold": "{threshold}" }}
            ]"#
        ));
        assert_valid(&document, &payload, &format!("vendor threshold '{threshold}' should validate"));
    }
    assert_valid(
        &document,
        &faction_payload(
            r#",
            "vendors": [
                {
                    "vendorId": "test-vendor",
                    "requiredThreshold": "allied",
                    "priceModifier": 0.9,
                    "exclusiveItems": ["item-1", "item-2", "item-3"]
                }
            ]"#,
        ),
        "vendor with exclusive items should validate",
    );
}

#[test]
fn faction_color_must_be_six_digit_hex() {
    let document = schema("factions.schema.json");
    for color in ["#B87333", "#8B4513", "#8B0000", "#4A4A4A", "#FFFFFF", "#000000"] {
        let payload = faction_payload(&format!(r#", "color": "{color}""#));
        assert_valid(&document, &payload, &format!("color '{color}' should validate"));
    }
    assert_invalid(
        &document,
        &faction_payload(r#", "color": "B87333""#),
        "color without '#' should fail",
    );
}

#[test]
fn hidden_factions_and_version_format() {
    let document = schema("factions.schema.json");
    assert_valid(
        &document,
        &faction_payload(r#", "isHidden": true"#),
        "hidden faction flag should validate",
    );
    assert_invalid(
        &document,
        &faction_payload("").replace("\"1.0.0\"", "\"v1.0\""),
        "version 'v1.0' should fail",
    );
    assert_invalid(
        &document,
        r#"{ "version": "1.0.0", "factions": [] }"#,
        "empty factions array should fail",
    );
}

#[test]
fn shipped_file_deserializes_into_typed_config() {
    let loader = ConfigLoader::new(config_dir());
    let config = loader.factions().expect("shipped file should load");

    assert_eq!(config.factions.len(), 4);
    let clans = config.faction("rust-clans").expect("rust-clans should exist");
    assert!(clans
        .relationships
        .iter()
        .any(|r| r.faction_id == "iron-banes" && r.relationship == RelationshipType::AtWar));

    let guild = config.faction("dvergr-guild").expect("dvergr-guild should exist");
    assert!(guild.is_hidden);

    let thresholds = config.default_thresholds.as_ref().expect("thresholds present");
    assert_eq!(thresholds.exalted.max, 10000);
}
