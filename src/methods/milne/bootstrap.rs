//! Modified Euler starting procedure.

use log::trace;

use crate::{Float, core::ode::ODE, error::Error};

use super::state::IntegrationState;

/// Append one sample by a trapezoidal fixed-point corrector started from
/// an explicit Euler guess.
///
/// The iteration stops once successive iterates differ by less than
/// `accuracy / 10`. Returns the number of iterations used, or
/// [`Error::NonConvergence`] after `maxiter` iterations. A non-finite iterate
/// never passes the stop test and ends in the same error.
pub fn bootstrap<F: ODE>(
    state: &mut IntegrationState<'_, F>,
    accuracy: Float,
    maxiter: usize,
) -> Result<usize, Error> {
    let h = state.step;
    let (x0, y0) = state.last();
    let x1 = state.x_at(state.count());
    let tol = accuracy / 10.0;

    let f0 = state.eval(x0, y0);
    let mut guess = y0 + h * f0;

    for iter in 1..=maxiter {
        let next = y0 + 0.5 * h * (f0 + state.eval(x1, guess));
        let delta = (next - guess).abs();
        trace!("bootstrap x = {x1}: iteration {iter}, y = {next}, delta = {delta:e}");

        if delta < tol {
            state.samples.push(next);
            state.niter += iter;
            return Ok(iter);
        }
        guess = next;
    }

    Err(Error::NonConvergence { x: x1, maxiter })
}
