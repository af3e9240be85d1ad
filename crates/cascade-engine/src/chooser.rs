//! Uniform selection among tied candidates.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Picks one element out of a non-empty slice.
///
/// The selector routes every randomized tie-break through this trait so a
/// deterministic implementation can stand in during tests.
pub trait Chooser {
    /// Returns one element of `items`, or `None` if `items` is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

/// Uniform random choice backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    /// Seeds from the operating system; runs are not reproducible.
    pub fn from_entropy() -> Self {
        RandomChooser {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds deterministically, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        RandomChooser { rng }
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// Always picks the first element.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChooser;

impl Chooser for FirstChooser {
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.first()
    }
}
