//! Match records and the aggregated analysis result

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::checksum::ChecksumKind;
use crate::resource::Resource;

/// Strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Matcher {
    #[serde(rename = "path match")]
    PathMatch,
    #[serde(rename = "checksum match")]
    ChecksumMatch,
}

/// Qualitative strength of a match.
///
/// Checksum matches are `Exact` and path-suffix matches are `High`. `Medium`
/// and `Low` are part of the output vocabulary but no matcher produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[serde(rename = "perfect")]
    Exact,
    High,
    Medium,
    Low,
}

/// A deploy-side path believed to be built from a develop resource.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchedResource {
    path: String,
    matcher: Matcher,
    confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum_matchtype: Option<ChecksumKind>,
}

impl MatchedResource {
    /// Exact match on an identical `kind` checksum.
    pub fn by_checksum(path: impl Into<String>, kind: ChecksumKind) -> Self {
        Self {
            path: path.into(),
            matcher: Matcher::ChecksumMatch,
            confidence: Confidence::Exact,
            checksum_matchtype: Some(kind),
        }
    }

    /// High-confidence match on a common path suffix.
    pub fn by_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            matcher: Matcher::PathMatch,
            confidence: Confidence::High,
            checksum_matchtype: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn matcher(&self) -> Matcher {
        self.matcher
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn checksum_matchtype(&self) -> Option<ChecksumKind> {
        self.checksum_matchtype
    }
}

/// All matches found for one develop-side path.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TraceResource {
    #[serde(flatten)]
    resource: Resource,
    #[serde(rename = "deployed_to")]
    matched_resources: Vec<MatchedResource>,
}

impl TraceResource {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            matched_resources: Vec::new(),
        }
    }

    /// The develop resource being traced.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn path(&self) -> &str {
        self.resource.path()
    }

    /// Matches in discovery order.
    pub fn matched_resources(&self) -> &[MatchedResource] {
        &self.matched_resources
    }

    pub fn has_matches(&self) -> bool {
        !self.matched_resources.is_empty()
    }

    /// Append a match unless a checksum match already targets the same path.
    ///
    /// Returns `true` when the match was appended.
    pub fn add_deployed_resource(&mut self, matched: MatchedResource) -> bool {
        let shadowed = self
            .matched_resources
            .iter()
            .any(|m| m.matcher == Matcher::ChecksumMatch && m.path == matched.path);
        if shadowed {
            return false;
        }
        self.matched_resources.push(matched);
        true
    }
}

/// Develop path to [`TraceResource`] mapping produced by one analysis run.
///
/// Only develop paths with at least one match are present. Iteration follows
/// the develop inventory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    traces: Vec<TraceResource>,
    positions: HashMap<String, usize>,
}

impl AnalysisResult {
    /// Collect the traces that have matches, keeping their order.
    pub(crate) fn from_traces(traces: impl IntoIterator<Item = TraceResource>) -> Self {
        let traces: Vec<TraceResource> = traces.into_iter().filter(|t| t.has_matches()).collect();
        let positions = traces
            .iter()
            .enumerate()
            .map(|(i, t)| (t.path().to_string(), i))
            .collect();
        Self { traces, positions }
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Look up the trace for a develop path.
    pub fn get(&self, develop_path: &str) -> Option<&TraceResource> {
        self.positions.get(develop_path).map(|&i| &self.traces[i])
    }

    pub fn contains(&self, develop_path: &str) -> bool {
        self.positions.contains_key(develop_path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceResource> {
        self.traces.iter()
    }

    /// Develop paths in result order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.traces.iter().map(TraceResource::path)
    }
}

impl<'r> IntoIterator for &'r AnalysisResult {
    type Item = &'r TraceResource;
    type IntoIter = std::slice::Iter<'r, TraceResource>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.traces.len()))?;
        for trace in &self.traces {
            map.serialize_entry(trace.path(), trace)?;
        }
        map.end()
    }
}
