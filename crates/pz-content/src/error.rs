use std::path::PathBuf;

use crate::kind::ContentKind;

/// Alias for `Result<T, ContentError>`.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while reading, parsing, or writing content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The backing file could not be read or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not valid JSON.
    #[error("{kind} content is not valid JSON: {source}")]
    Json {
        /// Collection being read.
        kind: ContentKind,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The document is JSON but does not match the collection's shape.
    #[error("{kind} content has an invalid shape: {source}")]
    Shape {
        /// Collection being parsed.
        kind: ContentKind,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A spread entry exists but its definition could not be parsed.
    #[error("spread \"{id}\" is malformed: {reason}")]
    InvalidSpread {
        /// Spread id.
        id: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// A content kind name was not recognized.
    #[error("unknown content kind: \"{0}\"")]
    UnknownKind(String),

    /// The store's internal lock was poisoned by a panicking writer.
    #[error("content store lock poisoned")]
    Poisoned,
}
