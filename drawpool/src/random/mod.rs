//! Random provider abstraction for sampling and shuffling.
//!
//! This module provides a provider pattern for the crate's randomness: every
//! sampling entry point draws through a [`RandomProvider`], so callers can
//! swap the production source for a deterministic one in tests without
//! touching the sampling code.
//!
//! [`ThreadRandomProvider`] is the process-wide default used by the sampling
//! operations that do not take an explicit provider. The deterministic
//! implementation lives in [`seeded`].

use rand::Rng;
use rand::distr::uniform::SampleUniform;
use std::cell::RefCell;
use std::ops::Range;

pub mod seeded;

/// Provider trait for uniform random draws.
///
/// This trait abstracts the source of randomness so that sampling code works
/// identically against the thread-local production generator and a seeded
/// deterministic generator. Implementations are cheap to clone; whether a
/// clone shares generator state with its original is part of each
/// implementation's contract.
pub trait RandomProvider: Clone {
    /// Draw a uniformly distributed value within `range`.
    ///
    /// The range is exclusive of the upper bound (`start..end`).
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd;

    /// Draw a uniformly distributed index below `bound`.
    ///
    /// `bound` must be positive. Callers in this crate reject empty buffers
    /// before drawing, so an index into zero elements is never requested.
    fn random_index(&self, bound: usize) -> usize {
        debug_assert!(bound > 0, "cannot draw an index below zero elements");
        self.random_range(0..bound)
    }
}

/// Production random provider using the thread-local generator.
///
/// Uses `rand::rng()` (thread-local, non-cryptographic). Because the state is
/// thread-local and initialized on first use, concurrent callers on different
/// threads never share generator state, and there is no other process-wide
/// mutation.
///
/// # Example
///
/// ```rust
/// use drawpool::{RandomProvider, ThreadRandomProvider};
///
/// let random = ThreadRandomProvider::new();
/// let value = random.random_range(1..100);
/// assert!((1..100).contains(&value));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ThreadRandomProvider;

impl ThreadRandomProvider {
    /// Create a new thread-local random provider.
    pub fn new() -> Self {
        Self
    }
}

// Thread-local RNG for ThreadRandomProvider
thread_local! {
    static RNG: RefCell<rand::rngs::ThreadRng> = RefCell::new(rand::rng());
}

impl RandomProvider for ThreadRandomProvider {
    fn random_range<T>(&self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        RNG.with(|rng| rng.borrow_mut().random_range(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_range_stays_in_bounds() {
        let random = ThreadRandomProvider::new();

        for _ in 0..100 {
            let value = random.random_range(10..20);
            assert!(value >= 10);
            assert!(value < 20);
        }

        for _ in 0..100 {
            let value = random.random_range(0.0..1.0);
            assert!(value >= 0.0);
            assert!(value < 1.0);
        }
    }

    #[test]
    fn random_index_stays_below_bound() {
        let random = ThreadRandomProvider::new();

        for _ in 0..100 {
            assert!(random.random_index(7) < 7);
        }

        // A bound of one leaves a single valid index.
        assert_eq!(random.random_index(1), 0);
    }
}
