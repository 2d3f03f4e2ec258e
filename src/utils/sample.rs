// src/utils/sample.rs

use rand::Rng;

use super::number::parse_leading_int;

/// Sample size used when the requested count is missing or unusable.
pub const DEFAULT_SAMPLE_COUNT: usize = 1;

/// Turns a raw `count` query value into a sample size.
///
/// Missing, non-numeric, zero or negative values fall back to
/// [`DEFAULT_SAMPLE_COUNT`].
pub fn normalize_count(raw: Option<&str>) -> usize {
    match raw.and_then(parse_leading_int) {
        Some(count) if count > 0 => usize::try_from(count).unwrap_or(usize::MAX),
        _ => DEFAULT_SAMPLE_COUNT,
    }
}

/// Draws `min(count, items.len())` distinct items uniformly at random.
pub fn take_random_sample<T>(items: Vec<T>, count: usize) -> Vec<T> {
    take_random_sample_with(items, count, &mut rand::thread_rng())
}

/// Same as [`take_random_sample`] with a caller-supplied RNG.
pub fn take_random_sample_with<T, R: Rng + ?Sized>(
    items: Vec<T>,
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    let mut pool = items;
    let limit = count.min(pool.len());
    let mut picked = Vec::with_capacity(limit);

    for _ in 0..limit {
        let index = rng.gen_range(0..pool.len());
        picked.push(pool.swap_remove(index));
    }

    picked
}
