//! High-level solve module: request type and entry points.

pub mod driver;
pub mod request;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use driver::{solve, solve_with};
pub use request::SolveRequest;
