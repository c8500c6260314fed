//! Content collections for Pleyazul oracles.
//!
//! This crate owns the read-only content the reading engine draws from:
//! tarot cards, I Ching hexagrams, medicine-wheel power animals, and the
//! spread definitions that tie an oracle to a number of positions. Content
//! lives in a [`ContentStore`] (JSON files on disk, or memory in tests) and
//! is served through a [`ContentCache`] that parses each collection once and
//! drops it again when an edit comes in.

/// Read-through cache over a content store.
pub mod cache;
/// Parsed content collections.
pub mod content;
/// Error types used throughout the crate.
pub mod error;
/// Content item types (cards, hexagrams, animals).
pub mod item;
/// Content kinds and oracle types.
pub mod kind;
/// Spread definitions.
pub mod spread;
/// Backing stores for raw content documents.
pub mod store;
/// Consistency checks across all collections.
pub mod validate;

pub use cache::{ContentCache, ContentSource};
pub use content::{Content, RejectedSpreads, Spreads};
pub use error::{ContentError, ContentResult};
pub use item::{DomainText, Hexagram, PowerAnimal, TarotCard};
pub use kind::{ContentKind, OracleType};
pub use spread::SpreadDefinition;
pub use store::{ContentStore, FsStore, MemoryStore};
pub use validate::{ValidationIssue, validate_library};
