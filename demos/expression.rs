//! # Example: Expression
//!
//! Solve a derivative typed as text.
//!
//! Usage:
//! cargo run --example expression -- "x + y/x" 1 2 1 0.01
//!
//! Arguments are the expression, x_start, x_end, y_start and the step size.
//!

use milne::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let source = args.first().map(String::as_str).unwrap_or("x + y/x");
    let number = |i: usize, default: f64| {
        args.get(i)
            .map(|s| s.parse::<f64>().unwrap_or_else(|_| panic!("argument {i} is not a number: {s}")))
            .unwrap_or(default)
    };
    let (x_start, x_end, y_start, h) = (number(1, 1.0), number(2, 2.0), number(3, 1.0), number(4, 0.01));

    let f = match Expression::parse(source) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("invalid expression '{}': {}", source, e);
            std::process::exit(1);
        }
    };

    match solve(&f, y_start, x_start, x_end, h) {
        Ok(sol) => {
            println!("y' = {}", f);
            for (x, y) in sol.iter().take(10) {
                println!("x = {:.6}, y = {:.10}", x, y);
            }
            if sol.len() > 10 {
                println!("... {} samples, h = {}", sol.len(), sol.h);
            }
        }
        Err(e) if e.is_input_error() => eprintln!("bad input: {}", e),
        Err(e) => eprintln!("integration failed: {}", e),
    }
}
