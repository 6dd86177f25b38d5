//! Checksum kinds and the exact-match checksum index

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::resource::Resource;

/// Hash algorithm of a checksum recorded in a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ChecksumKind {
    Sha1,
    Md5,
}

impl ChecksumKind {
    /// Every supported kind, in the order the checksum pass evaluates them.
    pub const ALL: [ChecksumKind; 2] = [ChecksumKind::Sha1, ChecksumKind::Md5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
        }
    }
}

impl FromStr for ChecksumKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "md5" => Ok(Self::Md5),
            _ => Err(Error::UnsupportedChecksumKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ChecksumKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index from checksum value to every resource path carrying that value.
///
/// Paths are kept in resource order and duplicates of the same content are
/// all retained, so one value can point at several deployed copies.
#[derive(Debug, Clone)]
pub struct ChecksumIndex<'a> {
    kind: ChecksumKind,
    paths_by_value: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ChecksumIndex<'a> {
    /// Build the index of `kind` checksums over `resources`.
    ///
    /// Resources without a `kind` checksum are skipped.
    pub fn build(resources: &'a [Resource], kind: ChecksumKind) -> Self {
        let mut paths_by_value: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for resource in resources {
            if let Some(value) = resource.checksum(kind) {
                paths_by_value.entry(value).or_default().push(resource.path());
            }
        }
        Self {
            kind,
            paths_by_value,
        }
    }

    pub fn kind(&self) -> ChecksumKind {
        self.kind
    }

    /// Paths whose checksum equals `value`; empty when there are none.
    pub fn get(&self, value: &str) -> &[&'a str] {
        self.paths_by_value
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct checksum values.
    pub fn len(&self) -> usize {
        self.paths_by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths_by_value.is_empty()
    }

    /// Copy the index into an owned map.
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.paths_by_value
            .iter()
            .map(|(value, paths)| {
                (
                    (*value).to_string(),
                    paths.iter().map(|p| (*p).to_string()).collect(),
                )
            })
            .collect()
    }
}
