//! Hash-based deterministic sampler.
//!
//! The first 32 bits of `sha256(seed)` are read big-endian and divided by
//! `0xFFFF_FFFF` to get `u` in `[0, 1]`, which is scaled into `[min, max]`.
//! This is bit-for-bit the mapping readings were issued with, so stored
//! readings can be regenerated. `u == 1.0` (a prefix of `0xFFFF_FFFF`)
//! would land one past `max`; it is folded into `max`.

use sha2::{Digest, Sha256};

use crate::error::{ReadingError, ReadingResult};
use crate::seed::Seed;

/// Map a seed to a value in `[0, 1]`.
pub fn unit_interval(seed: &Seed) -> f64 {
    let digest = Sha256::digest(seed.as_str().as_bytes());
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(prefix) / f64::from(u32::MAX)
}

/// Draw an integer in `[min, max]` from `seed`.
///
/// Pure: the same seed always gives the same value. Fails if `min > max`.
pub fn sample_int(seed: &Seed, min: usize, max: usize) -> ReadingResult<usize> {
    if min > max {
        return Err(ReadingError::Precondition(format!(
            "sample range is empty: min {min} > max {max}"
        )));
    }
    let span = (max - min) as f64 + 1.0;
    let offset = (unit_interval(seed) * span).floor() as usize;
    Ok(min + offset.min(max - min))
}

/// Draw `count` integers in `[min, max]`; value `i` uses seed `{seed}_{i}`.
///
/// Values are independent and may repeat; see [`crate::select`] for
/// distinct selection.
pub fn sample_int_sequence(
    seed: &Seed,
    count: usize,
    min: usize,
    max: usize,
) -> ReadingResult<Vec<usize>> {
    (0..count)
        .map(|i| sample_int(&seed.derive(i), min, max))
        .collect()
}
