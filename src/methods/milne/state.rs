//! Mutable state threaded through the solve pipeline.

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
};

/// Samples computed so far on the implicit grid `x_start + i * step`.
///
/// The state is created with the initial condition as its only sample and
/// grows by appending. It borrows the derivative and counts every
/// evaluation made through [`IntegrationState::eval`].
pub struct IntegrationState<'a, F: ODE> {
    pub(crate) derivative: &'a F,
    pub(crate) samples: Vec<Float>,
    pub(crate) x_start: Float,
    pub(crate) x_end: Float,
    pub(crate) step: Float,
    pub(crate) nfev: usize,
    pub(crate) nstep: usize,
    pub(crate) niter: usize,
}

impl<'a, F: ODE> IntegrationState<'a, F> {
    pub fn new(derivative: &'a F, x_start: Float, x_end: Float, y_start: Float, step: Float) -> Self {
        Self {
            derivative,
            samples: vec![y_start],
            x_start,
            x_end,
            step,
            nfev: 0,
            nstep: 0,
            niter: 0,
        }
    }

    /// Number of samples produced so far.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Float] {
        &self.samples
    }

    pub fn step(&self) -> Float {
        self.step
    }

    /// Abscissa of sample `i`.
    pub fn x_at(&self, i: usize) -> Float {
        self.x_start + i as Float * self.step
    }

    /// Most recent point `(x, y)`.
    pub fn last(&self) -> (Float, Float) {
        let n = self.samples.len() - 1;
        (self.x_at(n), self.samples[n])
    }

    pub(crate) fn eval(&mut self, x: Float, y: Float) -> Float {
        self.nfev += 1;
        self.derivative.ode(x, y)
    }

    pub fn into_solution(self) -> Solution {
        let x = (0..self.samples.len()).map(|i| self.x_at(i)).collect();
        Solution {
            x,
            y: self.samples,
            h: self.step,
            nfev: self.nfev,
            nstep: self.nstep,
            niter: self.niter,
        }
    }
}
