//! Step size reconciliation against the integration interval.

use crate::{Float, error::Error};

/// Ratios closer than this to an integer count as integral.
pub const INTEGRAL_TOLERANCE: Float = 1e-14;

/// Largest grid, in intervals, the planner or the resampler will build.
pub const MAX_INTERVALS: usize = 100_000_000;

/// Reject interval counts that are not finite or exceed [`MAX_INTERVALS`].
pub(crate) fn check_intervals(requested: Float) -> Result<(), Error> {
    if !requested.is_finite() || requested > MAX_INTERVALS as Float {
        return Err(Error::TooManyIntervals {
            requested,
            max: MAX_INTERVALS,
        });
    }
    Ok(())
}

/// Number of equal intervals covering `[x_start, x_end]` and their width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepPlan {
    pub intervals: usize,
    pub h: Float,
    /// True when `h` differs from the requested step.
    pub reconciled: bool,
}

/// Whole part of `ratio`, snapping to the nearest integer when it lies
/// within [`INTEGRAL_TOLERANCE`]. The flag reports whether snapping applied.
pub(crate) fn whole_part(ratio: Float) -> (Float, bool) {
    let nearest = ratio.round();
    if (ratio - nearest).abs() < INTEGRAL_TOLERANCE {
        (nearest, true)
    } else {
        (ratio.floor(), false)
    }
}

/// Reconcile the requested step `h` with the interval so that an integer
/// number of steps lands exactly on `x_end`.
///
/// A step that does not divide the interval is replaced by
/// `(x_end - x_start) / floor((x_end - x_start) / h)`. Intervals shorter
/// than `h` collapse to a single step, and an empty interval yields zero
/// steps. More than [`MAX_INTERVALS`] steps fail with
/// [`Error::TooManyIntervals`].
pub fn plan(x_start: Float, x_end: Float, h: Float) -> Result<StepPlan, Error> {
    let span = x_end - x_start;
    if !(x_end >= x_start) || !span.is_finite() {
        return Err(Error::InvalidInterval { x_start, x_end });
    }
    if !(h > 0.0) || !h.is_finite() {
        return Err(Error::InvalidStepSize(h));
    }

    if span == 0.0 {
        return Ok(StepPlan {
            intervals: 0,
            h,
            reconciled: false,
        });
    }

    let (k, integral) = whole_part(span / h);
    check_intervals(k)?;
    if integral && k >= 1.0 {
        return Ok(StepPlan {
            intervals: k as usize,
            h,
            reconciled: false,
        });
    }

    let k = k.max(1.0);
    Ok(StepPlan {
        intervals: k as usize,
        h: span / k,
        reconciled: true,
    })
}
