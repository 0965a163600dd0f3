//! Sampling operations: pick one, pick many, shuffle.

use crate::error::{SampleError, SampleResult};
use crate::random::{RandomProvider, ThreadRandomProvider};
use crate::shuffle::Shuffled;

/// Random sampling operations over any iterator.
///
/// Every operation materializes the source into an owned buffer first, since
/// uniform selection needs random access and a known length. The `_with`
/// variants accept an explicit [`RandomProvider`]; the plain variants draw
/// from the thread-local default.
pub trait IteratorSampleExt: Iterator + Sized {
    /// Pick one element uniformly at random using the default provider.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::EmptyInput`] when the source yields nothing.
    fn pick_one(self) -> SampleResult<Self::Item> {
        self.pick_one_with(&ThreadRandomProvider::new())
    }

    /// Pick one element uniformly at random, drawing through `random`.
    ///
    /// Each element is returned with probability `1/len`. A single index is
    /// drawn; the rest of the sequence is not shuffled.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::EmptyInput`] when the source yields nothing.
    fn pick_one_with<R: RandomProvider>(self, random: &R) -> SampleResult<Self::Item> {
        let mut items: Vec<Self::Item> = self.collect();
        if items.is_empty() {
            return Err(SampleError::EmptyInput);
        }
        let k = random.random_index(items.len());
        Ok(items.swap_remove(k))
    }

    /// Pick `count` distinct elements using the default provider.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidCount`] when `count` exceeds the number
    /// of elements in the source.
    fn pick_many(self, count: usize) -> SampleResult<Vec<Self::Item>> {
        self.pick_many_with(count, &ThreadRandomProvider::new())
    }

    /// Pick `count` distinct elements without replacement, drawing through
    /// `random`.
    ///
    /// Elements are distinct by position, not by value: a value that occurs
    /// twice in the source may be returned twice. The result order is the
    /// random emission order of the underlying shuffle, not the source
    /// order. Picking `len` elements is a full shuffle; picking zero returns
    /// an empty vector without drawing. Only `count` draws are performed.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidCount`] when `count` exceeds the number
    /// of elements in the source.
    fn pick_many_with<R: RandomProvider>(
        self,
        count: usize,
        random: &R,
    ) -> SampleResult<Vec<Self::Item>> {
        let items: Vec<Self::Item> = self.collect();
        if count > items.len() {
            return Err(SampleError::InvalidCount {
                requested: count,
                available: items.len(),
            });
        }
        tracing::trace!(len = items.len(), count, "sampling without replacement");
        Ok(Shuffled::new(items, random.clone()).take(count).collect())
    }

    /// Produce a lazy uniformly random permutation using the default
    /// provider.
    fn shuffled(self) -> Shuffled<Self::Item, ThreadRandomProvider> {
        self.shuffled_with(ThreadRandomProvider::new())
    }

    /// Produce a lazy uniformly random permutation, drawing through `random`.
    ///
    /// The returned iterator performs one draw per element consumed; see
    /// [`Shuffled`] for the laziness and abandonment contract.
    fn shuffled_with<R: RandomProvider>(self, random: R) -> Shuffled<Self::Item, R> {
        Shuffled::new(self.collect(), random)
    }
}

impl<I: Iterator> IteratorSampleExt for I {}
