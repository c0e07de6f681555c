#![warn(missing_docs)]
//! # runeweave-schema
//!
//! ## Purpose
//! Loads JSON Schema Draft-07 documents and validates raw configuration
//! JSON against them.
//!
//! ## Responsibilities
//! - Parse and compile `.schema.json` files into immutable
//!   [`SchemaDocument`] values with inspectable `definitions`.
//! - Cache compiled documents per path behind an atomic get-or-create
//!   ([`SchemaRegistry`]).
//! - Report every violated constraint of a document in one pass as a
//!   structured [`Violation`] list; malformed JSON text surfaces as a
//!   single violation rather than a crash.
//!
//! ## Data flow
//! `SchemaRegistry::load` -> [`SchemaDocument`] -> `validate_text` /
//! `validate_value` -> `Vec<Violation>` consumed by `runeweave-loader`
//! and the integration tests.
//!
//! ## Ownership and lifetimes
//! A `SchemaDocument` is immutable after construction and shared via
//! `Arc`; violations own their paths and messages so nothing borrows
//! from the validated input.
//!
//! ## Error model
//! Schema-side failures (missing file, bad JSON, uncompilable schema) are
//! [`SchemaError`] values and are fatal to validation against that
//! schema. Document-side failures are data, not errors: a `Vec<Violation>`.

pub mod document;
pub mod registry;
pub mod violation;

pub use document::{SchemaDocument, SchemaError};
pub use registry::SchemaRegistry;
pub use violation::{render_violations, Violation, ViolationKind};
