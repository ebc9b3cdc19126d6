//! # Example: Linear Growth
//!
//! Solve y' = x + y/x on [1, 2] and compare against the closed form.
//!
//! Equation:
//! dy/dx = x + y/x
//!
//! Initial condition: y(1) = 1, exact solution y = x^2
//!

use milne::prelude::*;

struct LinearGrowth;

impl ODE for LinearGrowth {
    fn ode(&self, x: f64, y: f64) -> f64 {
        x + y / x
    }
}

fn main() {
    let f = LinearGrowth;
    let x0 = 1.0;
    let xend = 2.0;
    let y0 = 1.0;

    let settings = Settings::builder()
        .accuracy(1e-10)
        .resolution(0.025)
        .build();
    let request = SolveRequest::new(&f, y0, x0, xend, 0.1);

    match solve_with(&request, &settings) {
        Ok(sol) => {
            println!("Samples: {}", sol.len());
            println!("Final step size: {}", sol.h);
            println!("Number of function evaluations: {}", sol.nfev);
            println!("Number of Milne steps: {}", sol.nstep);
            println!("Number of bootstrap iterations: {}", sol.niter);

            for (x, y) in sol.iter() {
                println!("x = {:.4}, y = {:.10}, error = {:.3e}", x, y, (y - x * x).abs());
            }
        }
        Err(e) => eprintln!("Integration failed: {}", e),
    }
}
