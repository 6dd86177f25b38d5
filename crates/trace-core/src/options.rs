//! Analysis options

use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumKind;

/// Switches for the matching phases of a [`DeploymentAnalysis`].
///
/// The default runs sha1 and md5 checksum matching followed by path
/// matching. Listing checksum kinds in a different order does not change
/// evaluation order: sha1 always runs before md5.
///
/// [`DeploymentAnalysis`]: crate::DeploymentAnalysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Checksum kinds compared during the checksum phase
    pub checksum_kinds: Vec<ChecksumKind>,
    /// Whether the path-suffix phase runs
    pub path_match: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            checksum_kinds: ChecksumKind::ALL.to_vec(),
            path_match: true,
        }
    }
}

impl AnalysisOptions {
    /// Enabled checksum kinds in evaluation order.
    pub fn enabled_checksum_kinds(&self) -> impl Iterator<Item = ChecksumKind> + '_ {
        ChecksumKind::ALL
            .into_iter()
            .filter(|kind| self.checksum_kinds.contains(kind))
    }
}
