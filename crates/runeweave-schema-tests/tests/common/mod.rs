//! Shared fixtures for schema integration tests.

use std::path::{Path, PathBuf};

use runeweave_schema::SchemaDocument;

/// Root of the shipped configuration tree.
pub fn config_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config")
}

/// Loads and compiles one shipped schema by filename.
#[allow(dead_code)]
pub fn schema(name: &str) -> SchemaDocument {
    SchemaDocument::from_path(config_dir().join("schemas").join(name))
        .expect("shipped schema should load and compile")
}

/// Reads one shipped content file to a string.
#[allow(dead_code)]
pub fn config_text(relative: &str) -> String {
    std::fs::read_to_string(config_dir().join(relative)).expect("shipped config should be readable")
}

/// Asserts the payload validates cleanly.
#[allow(dead_code)]
pub fn assert_valid(document: &SchemaDocument, payload: &str, why: &str) {
    let violations = document.validate_text(payload);
    assert!(
        violations.is_empty(),
        "{why}; unexpected violations:\n{}",
        runeweave_schema::render_violations(&violations)
    );
}

/// Asserts the payload fails validation, returning the violations for
/// further inspection.
#[allow(dead_code)]
pub fn assert_invalid(document: &SchemaDocument, payload: &str, why: &str) -> Vec<runeweave_schema::Violation> {
    let violations = document.validate_text(payload);
    assert!(!violations.is_empty(), "{why}, but validation passed");
    violations
}
