//! Solve entry points

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{milne::milne, settings::Settings},
};

use super::request::SolveRequest;

/// Solve y' = f(x, y), y(x_start) = y_start on `[x_start, x_end]` with
/// default [`Settings`].
///
/// Fails with [`Error::InvalidInterval`] when `x_end < x_start` and with
/// [`Error::InvalidStepSize`] when `step <= 0`.
pub fn solve<F>(f: &F, y_start: Float, x_start: Float, x_end: Float, step: Float) -> Result<Solution, Error>
where
    F: ODE,
{
    solve_with(
        &SolveRequest::new(f, y_start, x_start, x_end, step),
        &Settings::default(),
    )
}

/// Solve a [`SolveRequest`] with explicit settings.
pub fn solve_with<F>(request: &SolveRequest<'_, F>, settings: &Settings) -> Result<Solution, Error>
where
    F: ODE,
{
    milne(
        request.derivative,
        request.x_start,
        request.x_end,
        request.y_start,
        request.step,
        settings,
    )
}
