//! Immutable description of one solve.

use crate::{Float, core::ode::ODE};

/// Derivative, interval and requested step of a single solve.
///
/// The request is never modified; the step actually used is reported on
/// the returned [`Solution`](crate::core::solution::Solution).
pub struct SolveRequest<'a, F: ODE> {
    pub derivative: &'a F,
    pub y_start: Float,
    pub x_start: Float,
    pub x_end: Float,
    pub step: Float,
}

impl<'a, F: ODE> SolveRequest<'a, F> {
    pub fn new(derivative: &'a F, y_start: Float, x_start: Float, x_end: Float, step: Float) -> Self {
        Self {
            derivative,
            y_start,
            x_start,
            x_end,
            step,
        }
    }
}
