//! I Ching readings: one hexagram drawn straight from the order seed.

use chrono::{DateTime, Utc};
use pz_content::{Hexagram, SpreadDefinition};

use crate::error::{ReadingError, ReadingResult};
use crate::reading::IChingReading;
use crate::sampler::sample_int;
use crate::seed::Seed;

/// Closing message of every I Ching reading.
pub const MESSAGE: &str = "El I Ching revela su sabiduría milenaria.";

/// Draw an I Ching reading from `hexagrams`.
pub fn draw(
    spread_id: &str,
    spread: &SpreadDefinition,
    seed: &Seed,
    hexagrams: &[Hexagram],
    timestamp: DateTime<Utc>,
) -> ReadingResult<IChingReading> {
    let last = hexagrams.len().checked_sub(1).ok_or_else(|| {
        ReadingError::Precondition("cannot draw from an empty hexagram collection".to_string())
    })?;
    let index = sample_int(seed, 0, last)?;

    Ok(IChingReading {
        spread_id: spread_id.to_string(),
        spread: spread.clone(),
        index,
        hexagram: hexagrams[index].clone(),
        message: MESSAGE.to_string(),
        timestamp,
    })
}
