//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use milne::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Interpolate`, `Solution`.
//! - High-level API: `solve`, `solve_with`, `SolveRequest`, and `Settings`.
//! - The expression front-end: `Expression`.
//!

pub use crate::core::{interpolate::Interpolate, ode::ODE, solution::Solution};
pub use crate::expr::Expression;
pub use crate::methods::settings::Settings;
pub use crate::solve::{SolveRequest, solve, solve_with};
pub use crate::{Error, Float};
