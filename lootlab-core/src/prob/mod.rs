//! The probability engine: normalization, sampling models, and the binomial
//! outcome distribution.
//!
//! Everything here is a pure, synchronous leaf computation. Inputs are
//! validated at each function boundary and failures are surfaced as typed
//! errors; no NaN or Infinity sentinel ever escapes.

pub mod binomial;
pub mod normalize;
pub mod sampling;

pub use binomial::{binomial_pmf, MAX_DRAWS};
pub use normalize::normalize;
pub use sampling::{at_least_once_with_replacement, at_least_once_without_replacement};

/// Failure of a probability computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProbError {
    /// Total weight is zero; the distribution is undefined.
    #[error("degenerate distribution: total weight is zero")]
    DegenerateDistribution,

    /// A parameter is outside its documented domain.
    #[error("invalid parameter {name}: {value} is outside its valid range")]
    InvalidParameter { name: &'static str, value: f64 },

    /// More without-replacement draws than the table holds.
    #[error("cannot draw {draws} times without replacement from a table of {table_size}")]
    InvalidDrawCount { draws: u32, table_size: usize },

    /// Draw count beyond the supported bound.
    #[error("draw count {draws} exceeds the supported maximum of {max}")]
    RangeExceeded { draws: u32, max: u32 },
}

/// Rejects probabilities outside `[0, 1]`, including NaN.
pub(crate) fn check_probability(name: &'static str, p: f64) -> Result<(), ProbError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ProbError::InvalidParameter { name, value: p });
    }
    Ok(())
}
