//! Fixed-step Milne predictor-corrector solver for first-order ordinary
//! differential equations y' = f(x, y).
//!
//! The solve runs in four stages: the requested step is reconciled so an
//! integer number of steps spans the interval, three starting points are
//! produced with a modified Euler corrector, the Milne four-point
//! predictor-corrector advances the solution to `x_end`, and optionally the
//! result is resampled onto a finer uniform grid.
//!
//! ```rust
//! use milne::prelude::*;
//!
//! let sol = solve(&|x: f64, y: f64| x + y / x, 1.0, 1.0, 2.0, 0.01).unwrap();
//! let (x, y) = sol.iter().last().unwrap();
//! assert!((x - 2.0).abs() < 1e-12);
//! assert!((y - 4.0).abs() < 1e-3);
//! ```

mod error;

pub mod core;
pub mod expr;
pub mod methods;
pub mod prelude;
pub mod solve;

pub use error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Floating point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
