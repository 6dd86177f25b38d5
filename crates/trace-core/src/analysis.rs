//! Deployment analysis orchestration
//!
//! A [`DeploymentAnalysis`] relates every develop resource to the deploy
//! resources believed to be built from it. It runs two phases in a fixed
//! order:
//!
//! 1. **Checksum match**: identical sha1, then md5, values give exact matches.
//! 2. **Path match**: the longest common path suffix gives high-confidence
//!    matches, except where a checksum match already names the same target.

use std::collections::HashSet;
use std::fmt;

use tracing::{Span, debug, debug_span, info, info_span};

use crate::checksum::{ChecksumIndex, ChecksumKind};
use crate::matching::match_paths;
use crate::options::AnalysisOptions;
use crate::resource::Resource;
use crate::trace::{AnalysisResult, MatchedResource, TraceResource};

/// Matching phase of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ChecksumMatch,
    PathMatch,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChecksumMatch => f.write_str("checksum_match"),
            Self::PathMatch => f.write_str("path_match"),
        }
    }
}

/// One analysis run over a develop and a deploy inventory.
///
/// The run consumes the value, so each analysis executes exactly once.
/// Diagnostics are emitted inside the span given to [`with_span`]; by default
/// a fresh `deployment_analysis` span is used.
///
/// ```
/// use trace_core::{DeploymentAnalysis, Matcher, Resource};
///
/// let develop = [Resource::new("src/A.java").with_sha1("x")];
/// let deploy = [Resource::new("classes/A.class").with_sha1("x")];
///
/// let result = DeploymentAnalysis::new(&develop, &deploy).run();
/// let trace = result.get("src/A.java").unwrap();
/// assert_eq!(trace.matched_resources()[0].matcher(), Matcher::ChecksumMatch);
/// ```
///
/// [`with_span`]: DeploymentAnalysis::with_span
pub struct DeploymentAnalysis<'a> {
    develop: &'a [Resource],
    deploy: &'a [Resource],
    options: AnalysisOptions,
    span: Span,
}

impl<'a> DeploymentAnalysis<'a> {
    pub fn new(develop: &'a [Resource], deploy: &'a [Resource]) -> Self {
        let span = info_span!(
            "deployment_analysis",
            develop = develop.len(),
            deploy = deploy.len()
        );
        Self {
            develop,
            deploy,
            options: AnalysisOptions::default(),
            span,
        }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Emit diagnostics inside `span` instead of the default one.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Run both phases and return the develop paths that matched.
    pub fn run(self) -> AnalysisResult {
        let _entered = self.span.enter();

        let mut traces = distinct_traces(self.develop);

        self.checksum_phase(&mut traces);
        if self.options.path_match {
            self.path_phase(&mut traces);
        }

        let result = AnalysisResult::from_traces(traces);
        info!(
            develop = self.develop.len(),
            deploy = self.deploy.len(),
            matched = result.len(),
            "Deployment analysis complete"
        );
        result
    }

    fn checksum_phase(&self, traces: &mut [TraceResource]) {
        let _phase = debug_span!("phase", name = %Phase::ChecksumMatch).entered();

        for kind in self.options.enabled_checksum_kinds() {
            let index = ChecksumIndex::build(self.deploy, kind);
            debug!(%kind, values = index.len(), "Built deploy checksum index");

            let mut attached = 0usize;
            for trace in traces.iter_mut() {
                attached += attach_checksum_matches(trace, &index, kind);
            }
            debug!(%kind, attached, "Checksum pass finished");
        }
    }

    fn path_phase(&self, traces: &mut [TraceResource]) {
        let _phase = debug_span!("phase", name = %Phase::PathMatch).entered();

        let deploy_paths: Vec<&str> = self.deploy.iter().map(Resource::path).collect();
        let mut attached = 0usize;
        for trace in traces.iter_mut() {
            let matches: Vec<&str> = match_paths(trace.path(), deploy_paths.iter().copied()).collect();
            for deploy_path in matches {
                if trace.add_deployed_resource(MatchedResource::by_path(deploy_path)) {
                    debug!(develop = trace.path(), deploy = deploy_path, "Path match");
                    attached += 1;
                } else {
                    debug!(
                        develop = trace.path(),
                        deploy = deploy_path,
                        "Path match shadowed by checksum match"
                    );
                }
            }
        }
        debug!(attached, "Path pass finished");
    }
}

/// Run a default analysis of `develop` against `deploy`.
pub fn analyze(develop: &[Resource], deploy: &[Resource]) -> AnalysisResult {
    DeploymentAnalysis::new(develop, deploy).run()
}

/// One trace per distinct develop path, in first-seen order.
fn distinct_traces(develop: &[Resource]) -> Vec<TraceResource> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(develop.len());
    let mut traces = Vec::with_capacity(develop.len());
    for resource in develop {
        if !seen.insert(resource.path()) {
            debug!(path = resource.path(), "Duplicate develop path ignored");
            continue;
        }
        traces.push(TraceResource::new(resource.clone()));
    }
    traces
}

fn attach_checksum_matches(
    trace: &mut TraceResource,
    index: &ChecksumIndex<'_>,
    kind: ChecksumKind,
) -> usize {
    let targets = match trace.resource().checksum(kind) {
        Some(value) => index.get(value),
        None => return 0,
    };

    let mut attached = 0;
    for &deploy_path in targets {
        if trace.add_deployed_resource(MatchedResource::by_checksum(deploy_path, kind)) {
            debug!(develop = trace.path(), deploy = deploy_path, %kind, "Checksum match");
            attached += 1;
        }
    }
    attached
}
