//! Errors for the Milne integrator

use thiserror::Error;

use crate::Float;

/// Errors returned by the solve entry points.
///
/// Input validation errors are raised before the derivative is evaluated
/// even once. [`Error::NonConvergence`] is the only failure that can occur
/// mid-solve; no partial result is returned in that case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("x_end must not precede x_start (got x_start = {x_start}, x_end = {x_end})")]
    InvalidInterval { x_start: Float, x_end: Float },
    #[error("step size h must be positive (got {0})")]
    InvalidStepSize(Float),
    #[error("accuracy must be positive (got {0})")]
    AccuracyMustBePositive(Float),
    #[error("maxiter must be positive (got {0})")]
    MaxIterMustBePositive(usize),
    #[error("resolution must be positive (got {0})")]
    InvalidResolution(Float),
    #[error("grid of {requested} intervals exceeds the limit of {max}")]
    TooManyIntervals { requested: Float, max: usize },
    #[error("bootstrap corrector did not converge at x = {x} within {maxiter} iterations")]
    NonConvergence { x: Float, maxiter: usize },
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl Error {
    /// True when the error was caused by the caller's request or settings.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInterval { .. }
                | Error::InvalidStepSize(_)
                | Error::AccuracyMustBePositive(_)
                | Error::MaxIterMustBePositive(_)
                | Error::InvalidResolution(_)
                | Error::TooManyIntervals { .. }
        )
    }

    /// True when the numerics failed on otherwise valid input.
    pub fn is_numerical(&self) -> bool {
        matches!(self, Error::NonConvergence { .. })
    }
}
