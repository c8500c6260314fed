//! Seed derivation.
//!
//! A reading's seed is the hex SHA-256 of `"{order_id}_{email}"`. Every
//! draw uses a seed namespaced from it with [`Seed::derive`], which appends
//! `_{part}`. Namespaces in use:
//!
//! | draw                         | seed                                   |
//! |------------------------------|----------------------------------------|
//! | I Ching hexagram             | `{seed}`                               |
//! | tarot card, position `i`     | `{seed}_card_{i}` then `_{attempt}`    |
//! | card orientation, position `i` | `{seed}_reversed_{i}`                |
//! | rueda animal, position `i`   | `{seed}_animal_{i}` then `_{attempt}`  |

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Namespace for tarot card selection.
pub const CARD_NAMESPACE: &str = "card";
/// Namespace for medicine-wheel animal selection.
pub const ANIMAL_NAMESPACE: &str = "animal";
/// Namespace for tarot orientation draws.
pub const REVERSED_NAMESPACE: &str = "reversed";

/// A seed string driving deterministic draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    /// Wrap an arbitrary string as a seed.
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// The base seed for an order.
    pub fn for_order(order_id: &str, email: &str) -> Self {
        let digest = Sha256::digest(format!("{order_id}_{email}").as_bytes());
        Self(format!("{digest:x}"))
    }

    /// A child seed in the namespace `part`.
    pub fn derive(&self, part: impl fmt::Display) -> Self {
        Self(format!("{}_{part}", self.0))
    }

    /// The seed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
