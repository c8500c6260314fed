//! Configuration for the reading engine.

/// Default retry budget per position, as a multiple of the collection size.
pub const DEFAULT_MAX_ATTEMPTS_FACTOR: usize = 64;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Distinct-item selection gives up on a position after
    /// `max_attempts_factor * collection_size` draws.
    pub max_attempts_factor: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts_factor: DEFAULT_MAX_ATTEMPTS_FACTOR,
        }
    }
}

impl EngineConfig {
    /// Set the retry budget factor (at least 1).
    pub fn with_max_attempts_factor(mut self, factor: usize) -> Self {
        self.max_attempts_factor = factor.max(1);
        self
    }

    /// Attempts allowed per position for a collection of `collection_size` items.
    pub fn max_attempts(&self, collection_size: usize) -> usize {
        self.max_attempts_factor.max(1).saturating_mul(collection_size)
    }
}
