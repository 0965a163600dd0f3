//! # drawpool
//!
//! Sequence sampling and shuffling utilities built on Rust's iterators.
//!
//! The crate extends any iterator with two small families of operations:
//!
//! - **Exact-count predicates**: [`IteratorCountExt`] answers "does this
//!   sequence hold exactly `n` elements" without scanning further than it
//!   has to, so it is safe on unbounded sources.
//! - **Random sampling**: [`IteratorSampleExt`] picks one element, picks `k`
//!   distinct elements, or produces a full random permutation. All three are
//!   backed by a single lazy shuffler ([`Shuffled`]) that only pays for the
//!   elements actually consumed.
//!
//! Randomness is injected through the [`RandomProvider`] trait:
//! [`ThreadRandomProvider`] is the production default, and
//! [`SeededRandomProvider`] gives reproducible draws for tests.
//!
//! ## Example
//!
//! ```rust
//! use drawpool::{IteratorSampleExt, SeededRandomProvider};
//!
//! let random = SeededRandomProvider::new(42);
//! let hand = (1..=52).pick_many_with(5, &random).expect("deck holds 52 cards");
//!
//! assert_eq!(hand.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

/// Exact-count predicates over iterators.
pub mod count;
/// Error types for sampling operations.
pub mod error;
/// Random provider abstraction with production and deterministic sources.
pub mod random;
/// Sampling operations: pick one, pick many, shuffle.
pub mod sample;
/// Lazy uniformly random permutation of a sequence.
pub mod shuffle;

// Public API exports
pub use count::IteratorCountExt;
pub use error::{SampleError, SampleResult};
pub use random::{RandomProvider, ThreadRandomProvider, seeded::SeededRandomProvider};
pub use sample::IteratorSampleExt;
pub use shuffle::Shuffled;
