//! Codebase resource records
//!
//! A [`Resource`] is one entry of a scanned codebase inventory. It is an
//! immutable record: the matching engine only ever reads it.

use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumKind;

/// Kind of filesystem entry a resource describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    File,
    Directory,
}

/// One file or directory of a codebase inventory.
///
/// Checksums are optional; an empty string is treated the same as a missing
/// value by [`Resource::checksum`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    path: String,
    #[serde(rename = "type", default)]
    resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sha1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    md5: Option<String>,
}

impl Resource {
    /// Create a file resource at `path` with no checksums.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resource_type: ResourceType::File,
            size: None,
            sha1: None,
            md5: None,
        }
    }

    /// Create a directory resource at `path`.
    pub fn directory(path: impl Into<String>) -> Self {
        Self::new(path).with_type(ResourceType::Directory)
    }

    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_sha1(mut self, sha1: impl Into<String>) -> Self {
        self.sha1 = Some(sha1.into());
        self
    }

    pub fn with_md5(mut self, md5: impl Into<String>) -> Self {
        self.md5 = Some(md5.into());
        self
    }

    /// Root-relative, slash-separated path.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn sha1(&self) -> Option<&str> {
        self.sha1.as_deref()
    }

    pub fn md5(&self) -> Option<&str> {
        self.md5.as_deref()
    }

    /// Get the checksum of the given kind, or `None` when it is missing or empty.
    pub fn checksum(&self, kind: ChecksumKind) -> Option<&str> {
        let value = match kind {
            ChecksumKind::Sha1 => self.sha1(),
            ChecksumKind::Md5 => self.md5(),
        };
        value.filter(|v| !v.is_empty())
    }
}
