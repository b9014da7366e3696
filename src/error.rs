//! Error types for dugout-extract.
//!
//! Every pipeline fails fast: the first stage that cannot satisfy its
//! structural or pattern expectation aborts the whole invocation. No partial
//! record is ever returned.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An expected anchor element, row or column count is missing.
    ///
    /// Almost always means the page layout changed upstream or the wrong
    /// page type was supplied. Retrying with the same input cannot succeed.
    #[error("expected structure not found: {0}")]
    StructureNotFound(String),

    /// A lookup-table miss (position coordinates, icon token).
    ///
    /// Signals either a new value introduced upstream or an offset bug;
    /// never silently defaulted.
    #[error("unrecognized {table} key: {key:?}")]
    UnknownEnumKey {
        /// Which lookup table was consulted.
        table: &'static str,
        /// The key that failed to resolve.
        key: String,
    },

    /// A composite-string field did not match its capture pattern.
    #[error("text {text:?} does not match the expected {pattern} pattern")]
    MalformedPattern {
        /// Human-readable name of the pattern that failed.
        pattern: &'static str,
        /// The offending input text.
        text: String,
    },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
