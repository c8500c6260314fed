//! Distinct index selection and tarot orientation draws.

use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::error::{ReadingError, ReadingResult};
use crate::sampler::sample_int;
use crate::seed::{REVERSED_NAMESPACE, Seed};

/// Pick `count` pairwise-distinct indices in `[0, collection_size)`.
///
/// Position `i` first draws with `{seed}_{namespace}_{i}`; when that index
/// is taken, attempt `k` draws with `{seed}_{namespace}_{i}_{k}`. The i-th
/// output is the i-th position's pick. Attempts per position are capped at
/// [`EngineConfig::max_attempts`].
pub fn select_distinct(
    seed: &Seed,
    namespace: &str,
    count: usize,
    collection_size: usize,
    config: &EngineConfig,
) -> ReadingResult<Vec<usize>> {
    if count == 0 {
        return Err(ReadingError::Precondition(
            "at least one item must be drawn".to_string(),
        ));
    }
    if count > collection_size {
        return Err(ReadingError::InsufficientContent {
            requested: count,
            available: collection_size,
        });
    }

    let max_attempts = config.max_attempts(collection_size);
    let base = seed.derive(namespace);
    let mut used = HashSet::with_capacity(count);
    let mut picks = Vec::with_capacity(count);

    for position in 0..count {
        let position_seed = base.derive(position);
        let mut attempt = 0;
        let index = loop {
            if attempt == max_attempts {
                return Err(ReadingError::RetryLimitExceeded {
                    position,
                    attempts: max_attempts,
                });
            }
            let index = if attempt == 0 {
                sample_int(&position_seed, 0, collection_size - 1)?
            } else {
                sample_int(&position_seed.derive(attempt), 0, collection_size - 1)?
            };
            if used.insert(index) {
                break index;
            }
            attempt += 1;
        };
        picks.push(index);
    }

    Ok(picks)
}

/// Draw one orientation per position; `true` means reversed.
///
/// Uses its own namespace, so orientation never influences which items are
/// selected and vice versa.
pub fn draw_orientations(seed: &Seed, count: usize) -> ReadingResult<Vec<bool>> {
    let base = seed.derive(REVERSED_NAMESPACE);
    (0..count)
        .map(|i| sample_int(&base.derive(i), 0, 1).map(|v| v == 1))
        .collect()
}
