//! Utility functions shared across the crate.

use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};

/// Build a standard RNG, seeded when a seed is supplied.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Weighted random sampling over (item, weight) pairs.
///
/// Draws a threshold in `[0, total)` and walks the items until the running
/// weight crosses it. If all weights are zero, falls back to a uniform pick.
/// Returns `None` only for an empty slice.
pub fn weighted_sample<R, T>(rng: &mut R, items: &[(T, f64)]) -> Option<T>
where
    R: Rng,
    T: Copy,
{
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if !total.is_finite() || total <= 0.0 {
        return items.choose(rng).map(|(item, _)| *item);
    }

    let mut threshold = rng.random_range(0.0..total);
    for (item, weight) in items {
        threshold -= weight.max(0.0);
        if threshold < 0.0 {
            return Some(*item);
        }
    }

    // Numerical-stability fallback: the threshold never crossed zero.
    items.last().map(|(item, _)| *item)
}
