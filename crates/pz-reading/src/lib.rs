//! Deterministic reading engine for Pleyazul oracles.
//!
//! Maps an order identity to a reproducible, non-repeating selection of
//! tarot cards, an I Ching hexagram, or medicine-wheel animals, and
//! assembles the result into a typed [`Reading`]. Every draw is derived
//! from a SHA-256 based sampler seeded by the order, so generating the same
//! order twice against unchanged content yields the same reading.

pub mod config;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod reading;
pub mod render;
pub mod sampler;
pub mod seed;
pub mod select;

pub use config::EngineConfig;
pub use engine::ReadingEngine;
pub use error::{ReadingError, ReadingResult};
pub use reading::{DrawnAnimal, DrawnCard, IChingReading, Reading, RuedaReading, TarotReading};
pub use seed::Seed;
