#![warn(missing_docs)]
//! # runeweave-loader
//!
//! ## Purpose
//! Schema-gated loading of configuration files: read, validate against the
//! category schema, and only then deserialize into the typed model from
//! `runeweave-core`.
//!
//! ## Responsibilities
//! - Resolve each content file to its schema via the shipped layout.
//! - Run validation to completion (every violation, not just the first)
//!   before any typed deserialization is attempted.
//! - Walk the whole `config/` tree and report per-file results.
//!
//! ## Data flow
//! `ConfigLoader` -> `SchemaRegistry` (cached schema) -> validate raw JSON
//! -> `serde_json::from_value` into a `runeweave-core` type.
//!
//! ## Error model
//! I/O and schema failures are raised ([`LoadError::Io`],
//! [`LoadError::Schema`]) because they mean a broken checkout. Content
//! violations are data carried by [`LoadError::Invalid`] so callers can
//! inspect and report all of them.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use runeweave_core::{
    CodexConfig, CorruptionConfig, DescriptorConfig, DialogueNode, DiceMechanicsConfig,
    DiceTypesConfig, FactionsConfig, GlossaryConfig, StancesConfig, StressConfig,
};
use runeweave_schema::{render_violations, SchemaError, SchemaRegistry, Violation};

/// Root-level content files and the schema each one must satisfy.
const ROOT_FILES: &[(&str, &str)] = &[
    ("dice-types.json", "dice-types.schema.json"),
    ("dice-mechanics.json", "dice-mechanics.schema.json"),
    ("corruption-sources.json", "corruption-sources.schema.json"),
    ("stress-sources.json", "stress-sources.schema.json"),
    ("factions.json", "factions.schema.json"),
    ("glossary.json", "glossary.schema.json"),
    ("codex.json", "codex.schema.json"),
    ("stances.json", "stances.schema.json"),
];

/// Content subdirectories whose `*.json` files share one schema.
const DIR_SCHEMAS: &[(&str, &str)] = &[
    ("ability-descriptors", "ability-descriptors.schema.json"),
    ("dialogues", "dialogue.schema.json"),
];

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configuration file could not be read.
    #[error("cannot read configuration '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The schema side failed; nothing can be validated against it.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The document violates its schema. Carries every violation found.
    #[error("configuration '{path}' violates its schema:\n{}", render_violations(.violations))]
    Invalid {
        /// Path of the offending document.
        path: String,
        /// Every violated constraint, in schema-evaluation order.
        violations: Vec<Violation>,
    },
    /// Typed deserialization failed after validation passed. The schema is
    /// the single source of truth for shape, so this indicates drift
    /// between a schema and its typed model.
    #[error("configuration '{path}' validated but did not deserialize: {source}")]
    Deserialize {
        /// Path of the offending document.
        path: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Validation outcome for one file of the config tree.
#[derive(Debug)]
pub struct FileReport {
    /// The validated content file.
    pub path: PathBuf,
    /// Schema name it was checked against.
    pub schema_name: String,
    /// Violations found; empty means the file is clean.
    pub violations: Vec<Violation>,
}

/// Validation outcome for the whole config tree.
#[derive(Debug, Default)]
pub struct TreeReport {
    /// Per-file outcomes, in walk order.
    pub files: Vec<FileReport>,
}

impl TreeReport {
    /// True when every file validated clean.
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| f.violations.is_empty())
    }

    /// Total violation count across all files.
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }

    /// Files that failed validation.
    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.violations.is_empty())
    }
}

/// Schema-gated configuration loader rooted at a `config/` directory.
pub struct ConfigLoader {
    config_dir: PathBuf,
    registry: SchemaRegistry,
}

impl ConfigLoader {
    /// Creates a loader for `config_dir`; schemas are expected under
    /// `config_dir/schemas`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let registry = SchemaRegistry::new(config_dir.join("schemas"));
        Self {
            config_dir,
            registry,
        }
    }

    /// The config root this loader reads from.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The schema registry backing this loader.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Reads `config_path`, validates it against `schema_name`, and returns
    /// the raw JSON value.
    ///
    /// Validation runs to completion before the value is handed back; a
    /// document known to be schema-invalid is never returned.
    ///
    /// # Errors
    /// [`LoadError::Io`] when the file cannot be read, [`LoadError::Schema`]
    /// when the schema cannot be loaded, [`LoadError::Invalid`] with the
    /// full violation list otherwise.
    pub fn load_value(
        &self,
        schema_name: &str,
        config_path: impl AsRef<Path>,
    ) -> Result<Value, LoadError> {
        let config_path = config_path.as_ref();
        let document = self.registry.load(schema_name)?;

        let text = std::fs::read_to_string(config_path).map_err(|source| LoadError::Io {
            path: config_path.display().to_string(),
            source,
        })?;

        let violations = document.validate_text(&text);
        if !violations.is_empty() {
            return Err(LoadError::Invalid {
                path: config_path.display().to_string(),
                violations,
            });
        }

        // validate_text already proved the text parses.
        let value = serde_json::from_str(&text).map_err(|source| LoadError::Deserialize {
            path: config_path.display().to_string(),
            source,
        })?;

        tracing::debug!(
            path = %config_path.display(),
            schema = schema_name,
            "configuration validated"
        );
        Ok(value)
    }

    /// Reads, validates, and deserializes `config_path` into `T`.
    ///
    /// # Errors
    /// As [`ConfigLoader::load_value`], plus [`LoadError::Deserialize`]
    /// when the validated value does not fit `T` (schema/model drift).
    pub fn load<T: DeserializeOwned>(
        &self,
        schema_name: &str,
        config_path: impl AsRef<Path>,
    ) -> Result<T, LoadError> {
        let config_path = config_path.as_ref();
        let value = self.load_value(schema_name, config_path)?;
        serde_json::from_value(value).map_err(|source| LoadError::Deserialize {
            path: config_path.display().to_string(),
            source,
        })
    }

    /// Validates one file without deserializing it.
    ///
    /// # Errors
    /// As [`ConfigLoader::load_value`].
    pub fn validate_file(
        &self,
        schema_name: &str,
        config_path: impl AsRef<Path>,
    ) -> Result<(), LoadError> {
        self.load_value(schema_name, config_path).map(|_| ())
    }

    /// Validates every content file of the shipped layout and reports
    /// per-file results. Missing optional files are skipped; an unreadable
    /// present file or a missing schema is still an error.
    ///
    /// # Errors
    /// [`LoadError::Io`] / [`LoadError::Schema`] for infrastructure
    /// failures. Content violations do NOT error; they land in the report.
    pub fn validate_tree(&self) -> Result<TreeReport, LoadError> {
        let mut report = TreeReport::default();

        for (file_name, schema_name) in ROOT_FILES {
            let path = self.config_dir.join(file_name);
            if path.exists() {
                report.files.push(self.report_file(schema_name, path)?);
            }
        }

        for (dir_name, schema_name) in DIR_SCHEMAS {
            let dir = self.config_dir.join(dir_name);
            if !dir.is_dir() {
                continue;
            }
            let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
                .map_err(|source| LoadError::Io {
                    path: dir.display().to_string(),
                    source,
                })?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            paths.sort();
            for path in paths {
                report.files.push(self.report_file(schema_name, path)?);
            }
        }

        tracing::info!(
            files = report.files.len(),
            violations = report.violation_count(),
            "validated configuration tree"
        );
        Ok(report)
    }

    fn report_file(&self, schema_name: &str, path: PathBuf) -> Result<FileReport, LoadError> {
        let document = self.registry.load(schema_name)?;
        let text = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(FileReport {
            violations: document.validate_text(&text),
            schema_name: schema_name.to_string(),
            path,
        })
    }

    /// Loads and types `dice-types.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn dice_types(&self) -> Result<DiceTypesConfig, LoadError> {
        self.load("dice-types.schema.json", self.config_dir.join("dice-types.json"))
    }

    /// Loads and types `dice-mechanics.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn dice_mechanics(&self) -> Result<DiceMechanicsConfig, LoadError> {
        self.load(
            "dice-mechanics.schema.json",
            self.config_dir.join("dice-mechanics.json"),
        )
    }

    /// Loads and types `corruption-sources.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn corruption_sources(&self) -> Result<CorruptionConfig, LoadError> {
        self.load(
            "corruption-sources.schema.json",
            self.config_dir.join("corruption-sources.json"),
        )
    }

    /// Loads and types `stress-sources.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn stress_sources(&self) -> Result<StressConfig, LoadError> {
        self.load(
            "stress-sources.schema.json",
            self.config_dir.join("stress-sources.json"),
        )
    }

    /// Loads and types `factions.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn factions(&self) -> Result<FactionsConfig, LoadError> {
        self.load("factions.schema.json", self.config_dir.join("factions.json"))
    }

    /// Loads and types `glossary.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn glossary(&self) -> Result<GlossaryConfig, LoadError> {
        self.load("glossary.schema.json", self.config_dir.join("glossary.json"))
    }

    /// Loads and types `codex.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn codex(&self) -> Result<CodexConfig, LoadError> {
        self.load("codex.schema.json", self.config_dir.join("codex.json"))
    }

    /// Loads and types `stances.json`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn stances(&self) -> Result<StancesConfig, LoadError> {
        self.load("stances.schema.json", self.config_dir.join("stances.json"))
    }

    /// Loads and types one descriptor file from `ability-descriptors/`,
    /// e.g. `descriptors("galdr-actions")`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn descriptors(&self, name: &str) -> Result<DescriptorConfig, LoadError> {
        self.load(
            "ability-descriptors.schema.json",
            self.config_dir
                .join("ability-descriptors")
                .join(format!("{name}.json")),
        )
    }

    /// Loads and types one dialogue tree from `dialogues/`,
    /// e.g. `dialogue("bjorn")`.
    ///
    /// # Errors
    /// See [`ConfigLoader::load`].
    pub fn dialogue(&self, name: &str) -> Result<Vec<DialogueNode>, LoadError> {
        self.load(
            "dialogue.schema.json",
            self.config_dir.join("dialogues").join(format!("{name}.json")),
        )
    }
}
