//! Errors raised by the band computations

use thiserror::Error;

/// Failure of a single band computation. Errors never outlive the call that
/// produced them; a failing series does not affect any other series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BandError {
    #[error("series is empty, mean and standard deviation are undefined")]
    EmptySeries,

    #[error("series contains a non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Intermediate sums, squares or the range exceed the f64 range.
    #[error("series values are too large, statistics overflow")]
    Overflow,

    /// max == min, so there is no range to express band edges in.
    #[error("series is constant at {value}, band percentages are undefined")]
    DegenerateRange { value: f64 },
}
