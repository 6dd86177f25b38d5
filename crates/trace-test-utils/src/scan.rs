//! [`ScanPair`] builder writing develop and deploy scans to a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;
use trace_core::Resource;

/// Render `resources` as a minimal ScanCode JSON document.
pub fn scan_document(resources: &[Resource]) -> String {
    let document = json!({
        "headers": [{"tool_name": "scancode-toolkit"}],
        "files": resources,
    });
    serde_json::to_string_pretty(&document)
        .unwrap_or_else(|e| panic!("scan_document: failed to serialize resources: {e}"))
}

/// A temporary directory holding a develop and a deploy scan.
///
/// # Example
///
/// ```rust,no_run
/// use trace_core::Resource;
/// use trace_test_utils::ScanPair;
///
/// let scans = ScanPair::new(
///     &[Resource::new("src/A.java").with_sha1("x")],
///     &[Resource::new("A.class").with_sha1("x")],
/// );
/// assert!(scans.develop().exists());
/// ```
pub struct ScanPair {
    temp_dir: TempDir,
    develop: PathBuf,
    deploy: PathBuf,
}

impl ScanPair {
    /// Write `develop.json` and `deploy.json` into a fresh temp directory.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn new(develop: &[Resource], deploy: &[Resource]) -> Self {
        let temp_dir =
            TempDir::new().unwrap_or_else(|e| panic!("ScanPair::new: failed to create temp dir: {e}"));
        let develop_path = temp_dir.path().join("develop.json");
        let deploy_path = temp_dir.path().join("deploy.json");
        write(&develop_path, &scan_document(develop));
        write(&deploy_path, &scan_document(deploy));
        Self {
            temp_dir,
            develop: develop_path,
            deploy: deploy_path,
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn develop(&self) -> &Path {
        &self.develop
    }

    pub fn deploy(&self) -> &Path {
        &self.deploy
    }

    /// Write an arbitrary file next to the scans and return its path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        write(&path, content);
        path
    }
}

fn write(path: &Path, content: &str) {
    fs::write(path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
