//! Settings for the Milne integrator

use bon::Builder;

use crate::{Float, error::Error};

#[derive(Builder, Clone, Debug)]
/// Settings for the Milne integrator
pub struct Settings {
    /// Target accuracy of the bootstrap corrector. The fixed-point
    /// iteration stops once successive iterates differ by less than
    /// `accuracy / 10`. Default is 1e-10.
    #[builder(default = 1e-10)]
    pub accuracy: Float,
    /// Maximum number of fixed-point iterations per bootstrap point.
    /// Default is 1000.
    #[builder(default = 1000)]
    pub maxiter: usize,
    /// Target grid spacing of the returned solution. When the reconciled
    /// step is coarser, the solution is linearly resampled onto a grid
    /// `step / m` wide. None disables resampling.
    pub resolution: Option<Float>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(self.accuracy > 0.0 && self.accuracy.is_finite()) {
            return Err(Error::AccuracyMustBePositive(self.accuracy));
        }
        if self.maxiter == 0 {
            return Err(Error::MaxIterMustBePositive(self.maxiter));
        }
        if let Some(resolution) = self.resolution {
            if !(resolution > 0.0 && resolution.is_finite()) {
                return Err(Error::InvalidResolution(resolution));
            }
        }
        Ok(())
    }
}
