//! Linear resampling of a uniform solution onto a finer uniform grid.

use log::{debug, warn};

use crate::{
    Float,
    core::{
        interpolate::{Interpolate, Linear},
        ode::ODE,
    },
    error::Error,
    methods::milne::{IntegrationState, MAX_INTERVALS, check_intervals, whole_part},
};

/// Finer grid a solution is resampled onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Refinement {
    /// Subdivision factor, always greater than one.
    pub m: usize,
    /// New grid spacing `step / m`.
    pub h: Float,
    /// New number of samples.
    pub len: usize,
}

/// Grid for resampling `span` sampled every `step` at `resolution`.
///
/// The factor is `m = floor(step / resolution)`, with near-integral ratios
/// snapped to the nearest integer. Returns `None` when `m <= 1`. Fails with
/// [`Error::TooManyIntervals`] when `m` or the refined grid exceeds
/// [`MAX_INTERVALS`].
pub fn refinement(step: Float, span: Float, resolution: Float) -> Result<Option<Refinement>, Error> {
    let (m, _) = whole_part(step / resolution);
    check_intervals(m)?;
    if m <= 1.0 {
        return Ok(None);
    }

    let h = step / m;
    let intervals = (span / h).round();
    check_intervals(intervals)?;
    let len = (intervals as usize)
        .checked_add(1)
        .ok_or(Error::TooManyIntervals {
            requested: intervals,
            max: MAX_INTERVALS,
        })?;

    Ok(Some(Refinement {
        m: m as usize,
        h,
        len,
    }))
}

/// Refine the state onto the grid given by [`refinement`].
///
/// Every `m`-th new sample, and the last one, is the original sample at
/// that position, copied verbatim. Samples in between are interpolated
/// linearly from the bracketing original samples. A degenerate bracket
/// reuses the previous new sample. With `m <= 1` the state is returned
/// unchanged.
pub fn resample<'a, F: ODE>(
    mut state: IntegrationState<'a, F>,
    resolution: Float,
) -> Result<IntegrationState<'a, F>, Error> {
    let Some(Refinement { m, h, len }) =
        refinement(state.step, state.x_end - state.x_start, resolution)?
    else {
        return Ok(state);
    };

    let last = state.samples.len() - 1;

    let mut samples = Vec::with_capacity(len);
    for i in 0..len {
        let lo = (i / m).min(last);
        if i % m == 0 || i == len - 1 {
            samples.push(state.samples[if i == len - 1 { last } else { lo }]);
            continue;
        }

        let hi = (lo + 1).min(last);
        let line = Linear::new(
            state.x_at(lo),
            state.x_at(hi),
            state.samples[lo],
            state.samples[hi],
        );
        match line.interpolate(state.x_start + i as Float * h) {
            Some(y) => samples.push(y),
            None => {
                warn!("resample: degenerate interval at sample {i}, reusing previous value");
                samples.push(samples[i - 1]);
            }
        }
    }

    debug!(
        "resample: {} -> {} samples, h = {} -> {h}",
        state.samples.len(),
        samples.len(),
        state.step
    );
    state.samples = samples;
    state.step = h;
    Ok(state)
}
