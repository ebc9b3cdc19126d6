//! Interpolation trait and implementations

use crate::Float;

/// Spacing below which two abscissae are treated as the same point.
pub const DEGENERATE_SPAN: Float = 1e-14;

/// Trait for interpolating the solution between two computed samples.
pub trait Interpolate {
    /// Interpolate the solution at the given abscissa `xi`.
    /// Returns `None` when the bracketing interval is degenerate.
    fn interpolate(&self, xi: Float) -> Option<Float>;
}

/// Straight line through `(x0, y0)` and `(x1, y1)`.
pub struct Linear {
    x0: Float,
    x1: Float,
    y0: Float,
    y1: Float,
}

impl Linear {
    pub fn new(x0: Float, x1: Float, y0: Float, y1: Float) -> Self {
        Self { x0, x1, y0, y1 }
    }
}

impl Interpolate for Linear {
    fn interpolate(&self, xi: Float) -> Option<Float> {
        let dx = self.x1 - self.x0;
        if dx.abs() < DEGENERATE_SPAN {
            return None;
        }
        Some(self.y0 + (xi - self.x0) / dx * (self.y1 - self.y0))
    }
}
