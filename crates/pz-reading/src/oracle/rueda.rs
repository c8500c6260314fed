//! Medicine-wheel readings: distinct animals, no orientation.

use chrono::{DateTime, Utc};
use pz_content::{PowerAnimal, SpreadDefinition};

use super::position_label;
use crate::config::EngineConfig;
use crate::error::ReadingResult;
use crate::reading::{DrawnAnimal, RuedaReading};
use crate::seed::{ANIMAL_NAMESPACE, Seed};
use crate::select::select_distinct;

/// Closing message of every medicine-wheel reading.
pub const MESSAGE: &str = "Los animales de poder han sido llamados para guiarte.";

/// Fallback label prefix for unlabeled positions.
pub const POSITION_FALLBACK: &str = "Animal";

/// Draw a medicine-wheel reading from `animals`.
pub fn draw(
    spread_id: &str,
    spread: &SpreadDefinition,
    seed: &Seed,
    animals: &[PowerAnimal],
    config: &EngineConfig,
    timestamp: DateTime<Utc>,
) -> ReadingResult<RuedaReading> {
    let indices = select_distinct(seed, ANIMAL_NAMESPACE, spread.count, animals.len(), config)?;

    let animals = indices
        .into_iter()
        .enumerate()
        .map(|(position, index)| DrawnAnimal {
            index,
            item: animals[index].clone(),
            position: position_label(spread, position, POSITION_FALLBACK),
        })
        .collect();

    Ok(RuedaReading {
        spread_id: spread_id.to_string(),
        spread: spread.clone(),
        animals,
        message: MESSAGE.to_string(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::CARD_NAMESPACE;

    fn animals(n: usize) -> Vec<PowerAnimal> {
        (0..n)
            .map(|i| PowerAnimal {
                name: format!("Animal {i}"),
                archetype: String::new(),
                light: String::new(),
                shadow: String::new(),
                medicine: String::new(),
                affirmation: String::new(),
                element: String::new(),
                direction: String::new(),
                image: None,
            })
            .collect()
    }

    #[test]
    fn uses_animal_namespace() {
        let seed = Seed::new("wheel");
        let config = EngineConfig::default();
        let spread =
            SpreadDefinition::new("rueda", 4).with_positions(["Este", "Sur", "Oeste", "Norte"]);
        let reading = draw("r", &spread, &seed, &animals(12), &config, Utc::now()).unwrap();
        let indices: Vec<_> = reading.animals.iter().map(|a| a.index).collect();
        let expected = select_distinct(&seed, ANIMAL_NAMESPACE, 4, 12, &config).unwrap();
        assert_eq!(indices, expected);
        // Same seed, different namespace: the tarot draw is unrelated.
        let tarot = select_distinct(&seed, CARD_NAMESPACE, 4, 12, &config).unwrap();
        assert_ne!(indices, tarot);
        let labels: Vec<_> = reading.animals.iter().map(|a| a.position.as_str()).collect();
        assert_eq!(labels, ["Este", "Sur", "Oeste", "Norte"]);
        assert_eq!(reading.message, MESSAGE);
    }
}
