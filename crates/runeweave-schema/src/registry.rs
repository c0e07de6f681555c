//! Path-keyed cache of compiled schema documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::document::{SchemaDocument, SchemaError};

/// Loads schema documents from a root directory and caches them per path.
///
/// Caching is an optimization, not a correctness requirement: loading the
/// same path twice yields equivalent documents either way. The cache is a
/// get-or-create behind a `Mutex`, so concurrent first access is safe and
/// documents are shared read-only via `Arc` afterwards.
pub struct SchemaRegistry {
    schema_dir: PathBuf,
    cache: Mutex<HashMap<PathBuf, Arc<SchemaDocument>>>,
}

impl SchemaRegistry {
    /// Creates a registry rooted at `schema_dir`.
    pub fn new(schema_dir: impl Into<PathBuf>) -> Self {
        Self {
            schema_dir: schema_dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The directory schema names are resolved against.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads the named schema (for example `"dice-types.schema.json"`)
    /// from the registry root, reusing the cached document when present.
    ///
    /// # Errors
    /// Propagates [`SchemaError`] from the first load of the path.
    pub fn load(&self, schema_name: &str) -> Result<Arc<SchemaDocument>, SchemaError> {
        self.load_path(self.schema_dir.join(schema_name))
    }

    /// Loads a schema by explicit path, reusing the cached document when
    /// present.
    ///
    /// # Errors
    /// Propagates [`SchemaError`] from the first load of the path.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Arc<SchemaDocument>, SchemaError> {
        let path = path.as_ref();

        let mut cache = self.cache.lock().expect("schema cache lock poisoned");
        if let Some(document) = cache.get(path) {
            return Ok(Arc::clone(document));
        }

        let document = Arc::new(SchemaDocument::from_path(path)?);
        cache.insert(path.to_path_buf(), Arc::clone(&document));
        tracing::info!(
            path = %path.display(),
            title = document.title().unwrap_or("<untitled>"),
            "loaded schema"
        );
        Ok(document)
    }

    /// Number of documents currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.lock().expect("schema cache lock poisoned").len()
    }
}
