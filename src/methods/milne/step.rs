//! Milne four-point predictor-corrector.

use crate::{core::ode::ODE, error::Error};

use super::state::IntegrationState;

/// Advance the solution by one Milne predictor-corrector pass.
///
/// With `n` the index of the latest sample:
///
/// ```text
/// y_pred = y[n-3] + 4h/3 * (2 f[n-2] - f[n-1] + 2 f[n])
/// y[n+1] = y[n-1] + h/3  * (f[n-1] + 4 f[n] + f(x[n+1], y_pred))
/// ```
///
/// The corrector is applied exactly once. The trailing slopes `f[n-2]`,
/// `f[n-1]` and `f[n]` are evaluated once and shared by predictor and
/// corrector rather than recomputed for the corrector, so each step costs
/// four derivative evaluations. Results match recomputation only for a
/// derivative without side effects.
pub fn step<F: ODE>(state: &mut IntegrationState<'_, F>) -> Result<(), Error> {
    if state.count() < 4 {
        return Err(Error::InternalInvariant(
            "Milne step requires four trailing samples",
        ));
    }

    let h = state.step;
    let n = state.count() - 1;
    let (y3, y2, y1, y0) = (
        state.samples[n - 3],
        state.samples[n - 2],
        state.samples[n - 1],
        state.samples[n],
    );

    let f2 = state.eval(state.x_at(n - 2), y2);
    let f1 = state.eval(state.x_at(n - 1), y1);
    let f0 = state.eval(state.x_at(n), y0);

    // Predictor
    let y_pred = y3 + 4.0 * h / 3.0 * (2.0 * f2 - f1 + 2.0 * f0);

    // Corrector
    let f_pred = state.eval(state.x_at(n + 1), y_pred);
    let y_next = y1 + h / 3.0 * (f1 + 4.0 * f0 + f_pred);

    state.samples.push(y_next);
    state.nstep += 1;
    Ok(())
}

/// Step until the state holds `intervals + 1` samples.
pub fn advance<F: ODE>(state: &mut IntegrationState<'_, F>, intervals: usize) -> Result<(), Error> {
    while state.count() <= intervals {
        step(state)?;
    }
    Ok(())
}
