//! Deterministic random provider backed by a seeded ChaCha8 generator.

use super::RandomProvider;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

/// Deterministic random provider for reproducible sampling.
///
/// Wraps a ChaCha8 generator seeded from a `u64`. Two providers built from
/// the same seed produce the same sequence of draws, which makes sampling
/// results reproducible in tests.
///
/// Clones share the underlying generator: every draw made through any clone
/// advances the same stream. One instance is one stream; a fresh stream
/// requires a fresh call to [`SeededRandomProvider::new`].
///
/// # Example
///
/// ```rust
/// use drawpool::{RandomProvider, SeededRandomProvider};
///
/// let first = SeededRandomProvider::new(42);
/// let second = SeededRandomProvider::new(42);
///
/// assert_eq!(first.random_range(0..1000), second.random_range(0..1000));
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandomProvider {
    rng: Rc<RefCell<ChaCha8Rng>>,
    seed: u64,
}

impl SeededRandomProvider {
    /// Create a provider seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(ChaCha8Rng::seed_from_u64(seed))),
            seed,
        }
    }

    /// The seed this provider was built from.
    ///
    /// Useful in failure reports, so a failing sampling run can be replayed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomProvider for SeededRandomProvider {
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.borrow_mut().random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let first = SeededRandomProvider::new(42);
        let second = SeededRandomProvider::new(42);

        for _ in 0..20 {
            assert_eq!(
                first.random_range(0..1_000_000),
                second.random_range(0..1_000_000)
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let first = SeededRandomProvider::new(1);
        let second = SeededRandomProvider::new(2);

        let draws_first: Vec<u32> = (0..8).map(|_| first.random_range(0..u32::MAX)).collect();
        let draws_second: Vec<u32> = (0..8).map(|_| second.random_range(0..u32::MAX)).collect();

        assert_ne!(draws_first, draws_second);
    }

    #[test]
    fn clones_share_one_stream() {
        let original = SeededRandomProvider::new(7);
        let clone = original.clone();

        // Interleaved draws through both handles must match a single fresh
        // provider drained alone.
        let interleaved: Vec<usize> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    original.random_range(0..1000)
                } else {
                    clone.random_range(0..1000)
                }
            })
            .collect();

        let fresh = SeededRandomProvider::new(7);
        let drained: Vec<usize> = (0..10).map(|_| fresh.random_range(0..1000)).collect();

        assert_eq!(interleaved, drained);
    }

    #[test]
    fn seed_is_retained() {
        assert_eq!(SeededRandomProvider::new(12345).seed(), 12345);
        assert_eq!(SeededRandomProvider::new(12345).clone().seed(), 12345);
    }

    #[test]
    fn random_range_stays_in_bounds() {
        let random = SeededRandomProvider::new(123);

        for _ in 0..100 {
            let value = random.random_range(10..20);
            assert!(value >= 10);
            assert!(value < 20);
        }
    }
}
