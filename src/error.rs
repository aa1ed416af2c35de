//! Error types for apiref-extract.
//!
//! This module defines the error types returned by extraction operations.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node the page layout guarantees was not found (title, lead paragraph).
    #[error("missing expected node: {0}")]
    MissingNode(&'static str),

    /// No top-level section with the requested title exists on the page.
    #[error("no section titled {0:?}")]
    MissingSection(String),

    /// A record could not be converted to a JSON payload.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
