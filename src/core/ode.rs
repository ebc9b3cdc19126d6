//! User-supplied derivative y' = f(x, y).

use crate::Float;

/// User-supplied scalar ODE.
///
/// Implement this trait for your problem to provide the right-hand side
/// function y' = f(x, y). The integrator calls `ode` with the abscissa `x`
/// and the state `y` and uses the returned slope. The integrator never
/// inspects the function beyond calling it.
///
/// Closures of the form `Fn(Float, Float) -> Float` implement `ODE`
/// directly.
///
/// # Example
///
/// ```ignore
/// struct Decay { k: f64 }
/// impl ODE for Decay {
///     fn ode(&self, _x: f64, y: f64) -> f64 {
///         -self.k * y
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: Float) -> Float;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    fn ode(&self, x: Float, y: Float) -> Float {
        self(x, y)
    }
}
