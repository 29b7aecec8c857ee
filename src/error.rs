//! Error types for glossa.

use thiserror::Error;

/// Result type for glossa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for glossa operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A tag row's column count disagrees with the first row of its block.
    ///
    /// Fatal for that sentence's decode only; sibling sentences in a batch
    /// are unaffected.
    #[error("malformed tag row {row}: expected {expected} columns, found {found}")]
    MalformedRow {
        /// Zero-based index of the offending row within its sentence block.
        row: usize,
        /// Column count established by the first row of the block.
        expected: usize,
        /// Column count actually found on this row.
        found: usize,
    },

    /// A sentence block contained no tag rows.
    #[error("empty sentence block")]
    EmptyBlock,

    /// Tagger process failed or produced unreadable output.
    #[error("tagger unavailable: {0}")]
    Tagger(String),

    /// Dependency extractor process failed or produced unreadable output.
    #[error("dependency extractor failed: {0}")]
    DependencyExtractor(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tagger collaborator error.
    pub fn tagger(msg: impl Into<String>) -> Self {
        Error::Tagger(msg.into())
    }

    /// Create a dependency extractor collaborator error.
    pub fn dependency(msg: impl Into<String>) -> Self {
        Error::DependencyExtractor(msg.into())
    }
}
