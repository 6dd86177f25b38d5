//! Error types for trace-core

/// Result type for trace-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trace-core operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A checksum kind other than sha1 or md5 was requested
    #[error("Unsupported checksum kind: {kind} (expected sha1 or md5)")]
    UnsupportedChecksumKind { kind: String },
}
