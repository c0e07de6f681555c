//! Validates dice-types.schema.json: die structure, faces bounds, id and
//! color patterns, and the shipped standard die set.

mod common;

use common::{assert_invalid, assert_valid, config_text, schema};
use runeweave_schema::ViolationKind;

fn die_payload(fields: &str) -> String {
    format!(r#"{{ "dieTypes": [ {{ {fields} }} ] }}"#)
}

#[test]
fn schema_loads_with_expected_definitions() {
    let document = schema("dice-types.schema.json");
    assert_eq!(document.title(), Some("Dice Types Configuration Schema"));
    assert_eq!(document.root_type(), Some("object"));
    assert_eq!(document.definition_count(), 3);
    for name in ["DieType", "DiceExpression", "DiceExpressionPattern"] {
        assert!(document.definition(name).is_some(), "should define {name}");
    }
}

#[test]
fn shipped_dice_types_pass_validation() {
    let document = schema("dice-types.schema.json");
    assert_valid(
        &document,
        &config_text("dice-types.json"),
        "shipped dice-types.json should validate",
    );
}

#[test]
fn shipped_dice_types_contain_the_seven_standard_dice() {
    let content = config_text("dice-types.json");
    for die in ["d4", "d6", "d8", "d10", "d12", "d20", "d100"] {
        assert!(
            content.contains(&format!("\"id\": \"{die}\"")),
            "dice-types.json should contain {die}"
        );
    }
}

#[test]
fn shipped_dice_types_document_the_expression_grammar() {
    let content = config_text("dice-types.json");
    for key in ["expressionPattern", "pattern", "captureGroups", "examples"] {
        assert!(content.contains(key), "dice-types.json should contain {key}");
    }
}

#[test]
fn minimal_die_passes() {
    let document = schema("dice-types.schema.json");
    assert_valid(
        &document,
        &die_payload(r#""id": "d6", "name": "Six-sided Die", "faces": 6"#),
        "minimal die with id, name, faces should validate",
    );
}

#[test]
fn die_with_all_optional_fields_passes() {
    let document = schema("dice-types.schema.json");
    assert_valid(
        &document,
        &die_payload(
            r##""id": "d8", "name": "Eight-sided Die", "faces": 8,
               "minValue": 1, "maxValue": 8, "average": 4.5,
               "isStandard": true, "sortOrder": 2, "color": "#2196F3",
               "iconId": "dice_d8", "description": "Octahedron die used for medium weapons""##,
        ),
        "fully populated die should validate",
    );
}

#[test]
fn die_missing_required_fields_fails() {
    let document = schema("dice-types.schema.json");
    let cases = [
        (r#""id": "d6", "faces": 6"#, "die missing 'name'"),
        (r#""name": "Six-sided Die", "faces": 6"#, "die missing 'id'"),
        (r#""id": "d6", "name": "Six-sided Die""#, "die missing 'faces'"),
    ];
    for (fields, why) in cases {
        let violations = assert_invalid(&document, &die_payload(fields), why);
        assert!(
            violations.iter().any(|v| v.kind == ViolationKind::RequiredPropertyMissing),
            "{why} should report a required-property violation: {violations:?}"
        );
    }
}

#[test]
fn die_with_unknown_field_fails() {
    let document = schema("dice-types.schema.json");
    let violations = assert_invalid(
        &document,
        &die_payload(r#""id": "d6", "name": "Six-sided Die", "faces": 6, "unknownField": true"#),
        "die with unknown field should fail",
    );
    assert!(
        violations.iter().any(|v| v.kind == ViolationKind::AdditionalProperty),
        "unknown field should be an additional-property violation: {violations:?}"
    );
}

#[test]
fn faces_boundaries_hold() {
    let document = schema("dice-types.schema.json");
    // 2 is the coin-flip minimum; anything below fails.
    assert_valid(
        &document,
        &die_payload(r#""id": "d2", "name": "Coin", "faces": 2"#),
        "faces 2 should validate",
    );
    assert_valid(
        &document,
        &die_payload(r#""id": "d100", "name": "Percentile", "faces": 100"#),
        "faces 100 should validate",
    );
    for faces in ["1", "0", "-1"] {
        let violations = assert_invalid(
            &document,
            &die_payload(&format!(r#""id": "d6", "name": "Bad Die", "faces": {faces}"#)),
            &format!("faces {faces} should fail"),
        );
        assert!(
            violations.iter().any(|v| v.kind == ViolationKind::RangeViolation),
            "faces {faces} should be a range violation: {violations:?}"
        );
    }
}

#[test]
fn die_id_pattern_accepts_lowercase_d_prefix_only() {
    let document = schema("dice-types.schema.json");
    for id in ["d4", "d6", "d8", "d10", "d12", "d20", "d100", "d7", "d30"] {
        assert_valid(
            &document,
            &die_payload(&format!(r#""id": "{id}", "name": "Test Die", "faces": 6"#)),
            &format!("die id '{id}' should validate"),
        );
    }
    for id in ["D6", "d-6", "dice6", "6d", "d"] {
        let violations = assert_invalid(
            &document,
            &die_payload(&format!(r#""id": "{id}", "name": "Test Die", "faces": 6"#)),
            &format!("die id '{id}' should fail"),
        );
        assert!(
            violations.iter().any(|v| v.kind == ViolationKind::PatternMismatch),
            "die id '{id}' should be a pattern violation: {violations:?}"
        );
    }
}

#[test]
fn color_must_be_six_digit_hex() {
    let document = schema("dice-types.schema.json");
    for color in ["#FF5722", "#4CAF50", "#000000", "#FFFFFF", "#abcdef", "#123456"] {
        assert_valid(
            &document,
            &die_payload(&format!(
                r#""id": "d6", "name": "Six-sided Die", "faces": 6, "color": "{color}""#
            )),
            &format!("color '{color}' should validate"),
        );
    }
    for color in ["#fff", "FF5722", "#GGGGGG", "red"] {
        assert_invalid(
            &document,
            &die_payload(&format!(
                r#""id": "d6", "name": "Six-sided Die", "faces": 6, "color": "{color}""#
            )),
            &format!("color '{color}' should fail"),
        );
    }
    assert_valid(
        &document,
        &die_payload(r#""id": "d6", "name": "Six-sided Die", "faces": 6"#),
        "omitting optional color should validate",
    );
}

#[test]
fn empty_or_missing_die_list_fails() {
    let document = schema("dice-types.schema.json");
    let violations =
        assert_invalid(&document, r#"{ "dieTypes": [] }"#, "empty dieTypes should fail");
    assert!(
        violations.iter().any(|v| v.kind == ViolationKind::CardinalityViolation),
        "empty dieTypes should be a cardinality violation: {violations:?}"
    );
    assert_invalid(&document, r#"{ "version": "1.0.0" }"#, "missing dieTypes should fail");
}

#[test]
fn negative_sort_order_fails() {
    let document = schema("dice-types.schema.json");
    assert_invalid(
        &document,
        &die_payload(r#""id": "d6", "name": "Six-sided Die", "faces": 6, "sortOrder": -1"#),
        "negative sortOrder should fail",
    );
}
