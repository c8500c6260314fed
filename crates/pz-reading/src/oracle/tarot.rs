//! Tarot readings: distinct cards, each with its own orientation.

use chrono::{DateTime, Utc};
use pz_content::{SpreadDefinition, TarotCard};

use super::position_label;
use crate::config::EngineConfig;
use crate::error::ReadingResult;
use crate::reading::{DrawnCard, TarotReading};
use crate::seed::{CARD_NAMESPACE, Seed};
use crate::select::{draw_orientations, select_distinct};

/// Closing message of every tarot reading.
pub const MESSAGE: &str = "Las cartas han sido elegidas. Confía en su sabiduría.";

/// Fallback label prefix for unlabeled positions.
pub const POSITION_FALLBACK: &str = "Carta";

/// Draw a tarot reading from `deck`.
pub fn draw(
    spread_id: &str,
    spread: &SpreadDefinition,
    seed: &Seed,
    deck: &[TarotCard],
    config: &EngineConfig,
    timestamp: DateTime<Utc>,
) -> ReadingResult<TarotReading> {
    let indices = select_distinct(seed, CARD_NAMESPACE, spread.count, deck.len(), config)?;
    let orientations = draw_orientations(seed, spread.count)?;

    let cards = indices
        .into_iter()
        .zip(orientations)
        .enumerate()
        .map(|(position, (index, reversed))| {
            let item = deck[index].clone();
            DrawnCard {
                index,
                interpretation: item.meaning(reversed).to_string(),
                item,
                reversed,
                position: position_label(spread, position, POSITION_FALLBACK),
            }
        })
        .collect();

    Ok(TarotReading {
        spread_id: spread_id.to_string(),
        spread: spread.clone(),
        cards,
        message: MESSAGE.to_string(),
        timestamp,
    })
}
