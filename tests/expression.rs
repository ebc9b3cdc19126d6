use milne::expr::{Expr, ParseError, Var};
use milne::prelude::*;

mod common;
use common::{linear_growth_exact, max_error};

#[test]
fn parsed_expression_drives_the_solver() {
    let f = Expression::parse("x + y/x").unwrap();
    let sol = solve(&f, 1.0, 1.0, 2.0, 0.01).unwrap();
    assert!(max_error(&sol, linear_growth_exact(1.0, 1.0)) < 1e-3);
}

#[test]
fn matches_native_closure() {
    let f: Expression = "sin(x) - 0.5 * y".parse().unwrap();
    let g = |x: f64, y: f64| x.sin() - 0.5 * y;

    let a = solve(&f, 0.0, 0.0, 3.0, 0.05).unwrap();
    let b = solve(&g, 0.0, 0.0, 3.0, 0.05).unwrap();
    assert_eq!(a.y, b.y);
}

#[test]
fn keeps_source_text() {
    let f = Expression::parse("x * y").unwrap();
    assert_eq!(f.source(), "x * y");
    assert_eq!(f.to_string(), "x * y");
    assert!(matches!(f.ast(), Expr::Binary(_, lhs, _) if **lhs == Expr::Var(Var::X)));
}

#[test]
fn rejects_code_injection() {
    for src in ["__import__('os')", "open(x)", "x; y", "eval(y)"] {
        assert!(Expression::parse(src).is_err(), "accepted {src}");
    }
    assert_eq!(
        Expression::parse("exec(x)").unwrap_err(),
        ParseError::UnknownFunction {
            name: "exec".to_string(),
            pos: 0
        }
    );
}

#[test]
fn math_domain_errors_do_not_panic() {
    let f = Expression::parse("sqrt(y) + ln(x)").unwrap();
    assert!(f.eval(1.0, -1.0).is_nan());
    assert_eq!(f.eval(0.0, 0.0), f64::NEG_INFINITY);
}
