//! A struct representing the outputted result of the integrator.

use crate::Float;

/// Uniformly sampled solution of a solve, plus basic stats.
///
/// `x[i] == x_start + i * h` for every sample; `h` is the final step after
/// reconciliation and optional resampling and may differ from the step the
/// caller asked for.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Sample abscissae, monotonically increasing
    pub x: Vec<Float>,
    /// Sample values, `y[0]` is the initial condition
    pub y: Vec<Float>,
    /// Final grid spacing
    pub h: Float,
    /// The number of derivative evaluations
    pub nfev: usize,
    /// The number of Milne predictor-corrector steps taken
    pub nstep: usize,
    /// The number of bootstrap corrector iterations
    pub niter: usize,
}

impl Solution {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterate over `(x, y)` sample pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Consume the solution into its `(x, y)` sample pairs.
    pub fn into_pairs(self) -> Vec<(Float, Float)> {
        self.x.into_iter().zip(self.y).collect()
    }
}
