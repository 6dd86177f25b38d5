//! Segment-aware path comparison for TraceCode
//!
//! Paths are compared as sequences of whole `/`-separated segments. Partial
//! matches inside a segment never count.

pub mod extension;
pub mod segments;

pub use extension::{KNOWN_EXTENSIONS, strip_known_extension};
pub use segments::{
    common_path_prefix, common_path_suffix, common_prefix_len, common_suffix_len, segments,
};
