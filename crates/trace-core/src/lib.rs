//! Deployment matching engine for TraceCode
//!
//! Given a "develop" inventory (source tree) and a "deploy" inventory
//! (built or packaged tree), this crate works out which deployed files were
//! produced from which source files:
//!
//! - **Checksum index**: identical sha1 or md5 values are exact matches
//! - **Path matching**: the longest common run of trailing path segments,
//!   ignoring known source/compiled extensions, is a high-confidence match
//! - **Aggregation**: checksum matches run first and shadow path matches to
//!   the same deployed file
//!
//! # Architecture
//!
//! ```text
//!              trace-cli
//!                  |
//!         +--------+--------+
//!         |                 |
//!    trace-scan        trace-core
//!         |                 |
//!         +-------+---------+
//!                 |
//!            trace-paths
//! ```
//!
//! # Example
//!
//! ```
//! use trace_core::{Confidence, Matcher, Resource, analyze};
//!
//! let develop = vec![
//!     Resource::new("src/A.java").with_sha1("x"),
//!     Resource::new("src/B.java").with_sha1("y"),
//! ];
//! let deploy = vec![
//!     Resource::new("A.class").with_sha1("x"),
//!     Resource::new("B.class").with_sha1("z"),
//! ];
//!
//! let result = analyze(&develop, &deploy);
//! let b = &result.get("src/B.java").unwrap().matched_resources()[0];
//! assert_eq!(b.path(), "B.class");
//! assert_eq!(b.matcher(), Matcher::PathMatch);
//! assert_eq!(b.confidence(), Confidence::High);
//! ```

pub mod analysis;
pub mod checksum;
pub mod error;
pub mod matching;
pub mod options;
pub mod resource;
pub mod trace;

pub use analysis::{DeploymentAnalysis, Phase, analyze};
pub use checksum::{ChecksumIndex, ChecksumKind};
pub use error::{Error, Result};
pub use matching::{PathMatches, match_paths};
pub use options::AnalysisOptions;
pub use resource::{Resource, ResourceType};
pub use trace::{AnalysisResult, Confidence, MatchedResource, Matcher, TraceResource};
