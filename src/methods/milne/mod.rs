//! Milne's fixed-step multistep method with a modified Euler start.

mod bootstrap;
mod plan;
mod state;
mod step;

pub use bootstrap::bootstrap;
pub use plan::{INTEGRAL_TOLERANCE, MAX_INTERVALS, StepPlan, plan};
pub use state::IntegrationState;
pub use step::{advance, step};

pub(crate) use plan::{check_intervals, whole_part};

use log::{debug, warn};

use crate::{
    Float,
    core::{ode::ODE, solution::Solution},
    error::Error,
    methods::{
        resample::{refinement, resample},
        settings::Settings,
    },
};

/// Points produced by the starting procedure before Milne stepping begins.
pub const STARTING_POINTS: usize = 3;

/// Milne predictor-corrector integrator for a scalar ODE on
/// `[x_start, x_end]`.
///
/// The step `h` is first reconciled with the interval (see [`plan`]).
/// Three starting points come from [`bootstrap`]; the remaining points up
/// to `x_end` from [`step`]. When `settings.resolution` is finer than the
/// reconciled step the result is passed through [`resample`].
///
/// Intervals spanning fewer than three steps are bootstrapped only as far
/// as `x_end` and no multistep pass is taken.
pub fn milne<F>(
    f: &F,
    x_start: Float,
    x_end: Float,
    y_start: Float,
    h: Float,
    settings: &Settings,
) -> Result<Solution, Error>
where
    F: ODE,
{
    // --- Input Validation ---
    settings.validate()?;
    let plan = plan(x_start, x_end, h)?;
    if plan.reconciled {
        warn!(
            "step size {h} does not divide [{x_start}, {x_end}]; using {} over {} intervals",
            plan.h, plan.intervals
        );
    }
    if let Some(resolution) = settings.resolution {
        refinement(plan.h, x_end - x_start, resolution)?;
    }
    debug!(
        "milne: x = [{x_start}, {x_end}], h = {}, intervals = {}",
        plan.h, plan.intervals
    );

    let mut state = IntegrationState::new(f, x_start, x_end, y_start, plan.h);

    // --- Starting procedure ---
    for _ in 0..plan.intervals.min(STARTING_POINTS) {
        bootstrap(&mut state, settings.accuracy, settings.maxiter)?;
    }
    debug!(
        "milne: bootstrap produced {} samples in {} iterations",
        state.count(),
        state.niter
    );

    // --- Main integration loop ---
    if plan.intervals > STARTING_POINTS {
        advance(&mut state, plan.intervals)?;
    }
    if state.count() != plan.intervals + 1 {
        return Err(Error::InternalInvariant(
            "sample count does not match the planned number of steps",
        ));
    }

    // --- Optional resampling ---
    if let Some(resolution) = settings.resolution {
        state = resample(state, resolution)?;
    }

    debug!(
        "milne: finished with {} samples, h = {}, nfev = {}",
        state.count(),
        state.step,
        state.nfev
    );
    Ok(state.into_solution())
}
