#![allow(dead_code)]

use milne::prelude::*;

/// y' = x + y/x, exact solution y = x^2 + (y0/x0 - x0) x
pub fn linear_growth(x: f64, y: f64) -> f64 {
    x + y / x
}

pub fn linear_growth_exact(x0: f64, y0: f64) -> impl Fn(f64) -> f64 {
    move |x| x * x + (y0 / x0 - x0) * x
}

/// y' = -y
pub fn decay(_x: f64, y: f64) -> f64 {
    -y
}

/// Largest absolute deviation of the samples from `exact`.
pub fn max_error(sol: &Solution, exact: impl Fn(f64) -> f64) -> f64 {
    sol.iter()
        .map(|(x, y)| (y - exact(x)).abs())
        .fold(0.0, f64::max)
}

/// Grid invariant: `x[i] == x_start + i * h` and samples fill the interval.
pub fn assert_uniform_grid(sol: &Solution, x_start: f64, x_end: f64) {
    assert_eq!(sol.x.len(), sol.y.len());
    assert_eq!(sol.len(), ((x_end - x_start) / sol.h).round() as usize + 1);
    for (i, &x) in sol.x.iter().enumerate() {
        assert_eq!(x, x_start + i as f64 * sol.h);
    }
    let last = *sol.x.last().unwrap();
    assert!((last - x_end).abs() < 1e-9, "last x = {last}, x_end = {x_end}");
}
