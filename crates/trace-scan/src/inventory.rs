//! ScanCode JSON inventory loading
//!
//! A scan document is the JSON output of a ScanCode run. Only its `files`
//! array is read; every entry becomes one [`Resource`]:
//!
//! ```json
//! {
//!   "files": [
//!     {"path": "samples", "type": "directory", "sha1": null, "md5": null},
//!     {"path": "samples/README", "type": "file", "size": 236,
//!      "sha1": "2e07e32c52d607204fad196052d70e3d18fb8636",
//!      "md5": "effc6856ef85a9250fb1a470792b3f38"}
//!   ]
//! }
//! ```
//!
//! Other top-level keys and other per-file attributes are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use trace_core::Resource;
use tracing::{debug, warn};

use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct ScanDocument {
    files: Vec<Resource>,
}

/// An ordered inventory of resources read from one scan document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codebase {
    origin: PathBuf,
    resources: Vec<Resource>,
}

impl Codebase {
    /// Wrap already-built resources, e.g. for tests or other loaders.
    pub fn from_resources(origin: impl Into<PathBuf>, resources: Vec<Resource>) -> Self {
        Self {
            origin: origin.into(),
            resources,
        }
    }

    /// Parse a scan document. `origin` is only used for error messages.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyScan`] when the document is blank or a falsy JSON value
    ///   such as `{}` or `[]`
    /// - [`Error::InvalidScan`] when it is not JSON, has no `files` array, or
    ///   lists a record without a path
    pub fn from_json_str(content: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        let origin = origin.into();
        if content.trim().is_empty() {
            return Err(Error::EmptyScan { path: origin });
        }

        let value: Value =
            serde_json::from_str(content).map_err(|e| Error::invalid_scan(&origin, e.to_string()))?;
        if is_falsy(&value) {
            return Err(Error::EmptyScan { path: origin });
        }

        let document: ScanDocument =
            serde_json::from_value(value).map_err(|e| Error::invalid_scan(&origin, e.to_string()))?;
        if let Some(index) = document.files.iter().position(|r| r.path().is_empty()) {
            return Err(Error::invalid_scan(
                &origin,
                format!("file record {index} has an empty path"),
            ));
        }

        if document.files.is_empty() {
            warn!(path = %origin.display(), "Scan lists no files");
        }
        debug!(path = %origin.display(), resources = document.files.len(), "Loaded scan");

        Ok(Self {
            origin,
            resources: document.files,
        })
    }

    /// Path of the scan document this codebase was read from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resource paths in scan order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(Resource::path)
    }

    pub fn into_resources(self) -> Vec<Resource> {
        self.resources
    }
}

/// Read and parse the scan document at `path`.
pub fn load_codebase(path: impl AsRef<Path>) -> Result<Codebase> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Codebase::from_json_str(&content, path)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
