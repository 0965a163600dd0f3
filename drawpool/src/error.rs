use thiserror::Error;

/// Errors that can occur during sampling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// An operation that must return an element received an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptyInput,
    /// A requested sample size exceeds the number of available elements.
    #[error("requested {requested} distinct elements but only {available} are available")]
    InvalidCount {
        /// How many elements the caller asked for.
        requested: usize,
        /// How many elements the source actually holds.
        available: usize,
    },
}

/// A type alias for `Result<T, SampleError>`.
pub type SampleResult<T> = Result<T, SampleError>;
