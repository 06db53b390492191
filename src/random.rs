//! The random source behind `random_element`, `shuffle` and
//! `random_compare`.
//!
//! Any [`rand::Rng`] can be injected through the `_with` forms of those
//! operations. The forms without a suffix draw from the thread-local
//! generator returned by [`rand::rng`].
//!
//! # Reproducibility
//!
//! For reproducible tests, build the generator with [`seeded`]. The
//! underlying algorithm (`SmallRng`) is deterministic for a given seed on the
//! same platform.

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creates a fast, seeded random number generator.
///
/// # Examples
///
/// ```rust
/// use functional::random::seeded;
/// use rand::Rng;
///
/// let first: u32 = seeded(42).random();
/// let second: u32 = seeded(42).random();
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    tracing::trace!(seed, "seeding random source");
    SmallRng::seed_from_u64(seed)
}

/// Draws one of less, equal or greater with equal probability.
///
/// The result carries no information about any operands; it exists to feed
/// randomized sort orders.
pub fn random_ordering<R: Rng>(random: &mut R) -> Ordering {
    match random.random_range(0..3_u8) {
        0 => Ordering::Less,
        1 => Ordering::Equal,
        _ => Ordering::Greater,
    }
}
