//! Error types for article-harvest.
//!
//! This module defines the fault taxonomy shared across harvesting and
//! search: fetch and parse faults degrade inside the pipeline, input and
//! state faults surface to the caller.

/// Error type for harvesting and search operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network/transport failure reaching a source.
    #[error("Request error: {0}")]
    Fetch(String),

    /// Malformed or unexpected markup/feed structure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Caller-supplied query is invalid (absent or empty).
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Search requested before the corpus index was built.
    #[error("Corpus index not built")]
    IndexNotReady,

    /// Filesystem failure in the record store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record serialization/deserialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for harvesting and search operations.
pub type Result<T> = std::result::Result<T, Error>;
