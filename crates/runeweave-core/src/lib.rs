#![warn(missing_docs)]
//! # runeweave-core
//!
//! ## Purpose
//! Defines the pure typed data model for every content category shipped in
//! the `config/` tree.
//!
//! ## Responsibilities
//! - Mirror each schema's record shapes as owned serde structs.
//! - Mirror each schema's closed vocabularies as Rust enums, so that a
//!   value the schema would reject also fails typed deserialization.
//! - Provide light lookup helpers over deserialized configuration.
//!
//! ## Data flow
//! `runeweave-loader` validates a raw JSON document against its schema and
//! then deserializes it into one of the `*Config` roots defined here.
//!
//! ## Ownership and lifetimes
//! All records own their data (`String`, `Vec`, `BTreeMap`); nothing borrows
//! from the transient file buffer the loader reads.
//!
//! ## Error model
//! This crate performs no I/O and no validation of its own; shape errors
//! surface as `serde_json::Error` at the deserialization boundary.

pub mod codex;
pub mod corruption;
pub mod descriptors;
pub mod dialogue;
pub mod dice;
pub mod factions;
pub mod glossary;
pub mod stances;
pub mod stress;

pub use codex::CodexConfig;
pub use corruption::CorruptionConfig;
pub use descriptors::DescriptorConfig;
pub use dialogue::DialogueNode;
pub use dice::{DiceMechanicsConfig, DiceTypesConfig};
pub use factions::FactionsConfig;
pub use glossary::GlossaryConfig;
pub use stances::StancesConfig;
pub use stress::StressConfig;
