//! Parsed and compiled schema documents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use thiserror::Error;

use crate::violation::Violation;

/// Error loading or compiling a schema document.
///
/// These are fatal to validation against the schema in question: a missing
/// or broken schema means a broken build, not a content-authoring mistake.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("cannot read schema file '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The schema file is not valid JSON.
    #[error("schema file '{path}' is not valid JSON: {source}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The schema parsed but is not a valid Draft-07 schema (for example a
    /// malformed `$ref`).
    #[error("schema file '{path}' did not compile: {reason}")]
    Compile {
        /// Path that failed to compile.
        path: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

/// An immutable, compiled Draft-07 schema document.
///
/// Construction resolves same-document `$ref`s into `definitions`, so the
/// compiled validator and the raw definition sub-schemas can both be
/// inspected. A document never changes after construction and is safe to
/// share across threads.
#[derive(Debug)]
pub struct SchemaDocument {
    path: PathBuf,
    title: Option<String>,
    root_type: Option<String>,
    definitions: BTreeMap<String, Value>,
    compiled: JSONSchema,
}

impl SchemaDocument {
    /// Loads and compiles the schema at `path`.
    ///
    /// # Errors
    /// Returns [`SchemaError::Io`] when the file cannot be read,
    /// [`SchemaError::Parse`] when it is not JSON, and
    /// [`SchemaError::Compile`] when it is not a valid Draft-07 schema.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| SchemaError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_value(path, value)
    }

    /// Compiles an already-parsed schema value. `path` is kept for
    /// diagnostics only.
    ///
    /// # Errors
    /// Returns [`SchemaError::Compile`] when the value is not a valid
    /// Draft-07 schema.
    pub fn from_value(path: impl AsRef<Path>, value: Value) -> Result<Self, SchemaError> {
        let path = path.as_ref().to_path_buf();

        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&value)
            .map_err(|error| SchemaError::Compile {
                path: path.display().to_string(),
                reason: error.to_string(),
            })?;

        let title = value
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);
        let root_type = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut definitions = BTreeMap::new();
        if let Some(map) = value.get("definitions").and_then(Value::as_object) {
            for (name, sub_schema) in map {
                definitions.insert(name.clone(), sub_schema.clone());
            }
        }

        tracing::debug!(
            path = %path.display(),
            definitions = definitions.len(),
            "compiled schema document"
        );

        Ok(Self {
            path,
            title,
            root_type,
            definitions,
            compiled,
        })
    }

    /// The path this document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The schema's declared `title`, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The schema's declared root `type`, if any (`"object"` for every
    /// category here except dialogue trees, which are `"array"`).
    pub fn root_type(&self) -> Option<&str> {
        self.root_type.as_deref()
    }

    /// Names of the schema's `definitions`, sorted.
    pub fn definition_names(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    /// Looks up one named sub-schema.
    pub fn definition(&self, name: &str) -> Option<&Value> {
        self.definitions.get(name)
    }

    /// Number of named sub-schemas.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Validates a parsed JSON value, returning every violated constraint.
    /// An empty list means the document conforms.
    pub fn validate_value(&self, instance: &Value) -> Vec<Violation> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|error| Violation::from_validation_error(&error))
                .collect(),
        }
    }

    /// Validates raw JSON text. Text that does not parse yields exactly one
    /// [`crate::ViolationKind::MalformedJson`] violation, so callers have a
    /// single uniform path for "document is invalid".
    pub fn validate_text(&self, text: &str) -> Vec<Violation> {
        match serde_json::from_str::<Value>(text) {
            Ok(instance) => self.validate_value(&instance),
            Err(error) => vec![Violation::malformed_json(&error)],
        }
    }

    /// Convenience check used where the violation detail is irrelevant.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.compiled.is_valid(instance)
    }
}
