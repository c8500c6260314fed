//! Error types for the reading engine.

use pz_content::{ContentError, OracleType};
use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while generating a reading.
///
/// All of these are deterministic: retrying with the same inputs against
/// the same content reproduces the same error.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// No spread with the requested id.
    #[error("spread not found: \"{0}\"")]
    SpreadNotFound(String),

    /// The spread names an oracle the engine does not know.
    #[error("unknown oracle type: \"{0}\"")]
    UnknownOracle(String),

    /// The collection backing the oracle is missing or empty.
    #[error("{} content not available", .0.label())]
    ContentUnavailable(OracleType),

    /// More distinct items were requested than the collection holds.
    #[error("insufficient content: {requested} distinct items requested, {available} available")]
    InsufficientContent {
        /// Items the spread asks for.
        requested: usize,
        /// Items in the collection.
        available: usize,
    },

    /// The bounded retry loop could not find an unused item.
    #[error("no unused item found for position {position} after {attempts} attempts")]
    RetryLimitExceeded {
        /// Zero-based position being drawn.
        position: usize,
        /// Attempts made before giving up.
        attempts: usize,
    },

    /// A caller broke a precondition (empty spread, inverted range).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Content could not be loaded or parsed.
    #[error(transparent)]
    Content(#[from] ContentError),
}
