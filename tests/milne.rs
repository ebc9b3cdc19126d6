use milne::methods::milne::{IntegrationState, bootstrap, step};
use milne::prelude::*;

mod common;
use common::{assert_uniform_grid, decay, linear_growth, linear_growth_exact, max_error};

#[test]
fn matches_closed_form_solution() {
    let sol = solve(&linear_growth, 1.0, 1.0, 2.0, 0.01).unwrap();
    assert_eq!(sol.len(), 101);
    assert_eq!(sol.h, 0.01);
    assert_uniform_grid(&sol, 1.0, 2.0);
    assert!(max_error(&sol, linear_growth_exact(1.0, 1.0)) < 1e-3);
    assert_eq!(sol.nstep, 97);
}

#[test]
fn closed_form_with_other_initial_value() {
    let (x0, y0) = (2.0, 3.0);
    let sol = solve(&linear_growth, y0, x0, 3.0, 0.01).unwrap();
    assert_uniform_grid(&sol, x0, 3.0);
    assert!(max_error(&sol, linear_growth_exact(x0, y0)) < 1e-3);
}

#[test]
fn exponential_decay_is_tracked() {
    let sol = solve(&decay, 1.0, 0.0, 2.0, 0.01).unwrap();
    assert_uniform_grid(&sol, 0.0, 2.0);
    assert!(max_error(&sol, |x| (-x).exp()) < 1e-6);
}

#[test]
fn constant_solution_is_preserved() {
    let zero = |_x: f64, _y: f64| 0.0;
    let sol = solve(&zero, 2.5, -1.0, 1.0, 0.05).unwrap();
    assert_eq!(sol.len(), 41);
    for (_, y) in sol.iter() {
        assert!((y - 2.5).abs() < 1e-9);
    }
}

#[test]
fn uneven_step_is_reconciled() {
    let sol = solve(&linear_growth, 1.0, 1.0, 2.0, 0.03).unwrap();
    // floor(1 / 0.03) = 33 intervals
    assert_eq!(sol.len(), 34);
    assert!((sol.h - 1.0 / 33.0).abs() < 1e-15);
    assert_uniform_grid(&sol, 1.0, 2.0);
    assert!(max_error(&sol, linear_growth_exact(1.0, 1.0)) < 1e-3);
}

#[test]
fn count_matches_grid_for_various_steps() {
    for &(x_start, x_end, h) in &[
        (0.0, 1.0, 0.1),
        (0.0, 1.0, 0.3),
        (0.0, 1.0, 0.15),
        (-2.0, 3.0, 0.07),
        (1.0, 1.5, 0.5),
        (0.0, 0.25, 0.1),
    ] {
        let sol = solve(&decay, 1.0, x_start, x_end, h).unwrap();
        assert_uniform_grid(&sol, x_start, x_end);
    }
}

#[test]
fn short_intervals_stop_after_bootstrap() {
    // Two intervals: only two bootstrap points and no Milne step.
    let sol = solve(&decay, 1.0, 0.0, 0.2, 0.1).unwrap();
    assert_eq!(sol.len(), 3);
    assert_eq!(sol.nstep, 0);

    // Three intervals: the full bootstrap covers the interval exactly.
    let sol = solve(&decay, 1.0, 0.0, 0.3, 0.1).unwrap();
    assert_eq!(sol.len(), 4);
    assert_eq!(sol.nstep, 0);

    // Empty interval returns the initial condition only.
    let sol = solve(&decay, 1.0, 0.5, 0.5, 0.1).unwrap();
    assert_eq!(sol.into_pairs(), vec![(0.5, 1.0)]);
}

#[test]
fn rejects_invalid_input() {
    let err = solve(&decay, 1.0, 2.0, 1.0, 0.1).unwrap_err();
    assert_eq!(err, Error::InvalidInterval { x_start: 2.0, x_end: 1.0 });
    assert!(err.is_input_error());

    assert_eq!(solve(&decay, 1.0, 0.0, 1.0, 0.0).unwrap_err(), Error::InvalidStepSize(0.0));
    assert_eq!(solve(&decay, 1.0, 0.0, 1.0, -0.1).unwrap_err(), Error::InvalidStepSize(-0.1));
}

#[test]
fn rejects_step_too_fine_for_interval() {
    let zero = |_x: f64, _y: f64| 0.0;
    for (x_end, h) in [(1e300, 1e-300), (1e10, 1e-300), (1.0, 1e-9)] {
        let err = solve(&zero, 1.0, 0.0, x_end, h).unwrap_err();
        assert!(matches!(err, Error::TooManyIntervals { .. }), "{err}");
        assert!(err.is_input_error());
    }
}

#[test]
fn rejects_invalid_settings_before_evaluating() {
    let calls = std::cell::Cell::new(0);
    let f = |_x: f64, y: f64| {
        calls.set(calls.get() + 1);
        y
    };
    let request = SolveRequest::new(&f, 1.0, 0.0, 1.0, 0.1);

    let settings = Settings::builder().accuracy(0.0).build();
    assert_eq!(solve_with(&request, &settings).unwrap_err(), Error::AccuracyMustBePositive(0.0));

    let settings = Settings::builder().maxiter(0).build();
    assert_eq!(solve_with(&request, &settings).unwrap_err(), Error::MaxIterMustBePositive(0));

    let settings = Settings::builder().resolution(-1.0).build();
    assert_eq!(solve_with(&request, &settings).unwrap_err(), Error::InvalidResolution(-1.0));

    assert_eq!(calls.get(), 0);
}

#[test]
fn non_contracting_derivative_fails_to_converge() {
    let stiff = |_x: f64, y: f64| 1000.0 * y;
    let err = solve(&stiff, 1.0, 0.0, 1.0, 0.01).unwrap_err();
    assert!(matches!(err, Error::NonConvergence { maxiter: 1000, .. }));
    assert!(err.is_numerical());
    assert!(!err.is_input_error());
}

#[test]
fn iteration_cap_is_configurable() {
    // Contraction factor h/2 * 10 = 0.5: converges, but not in two iterations.
    let f = |_x: f64, y: f64| 10.0 * y;
    let request = SolveRequest::new(&f, 1.0, 0.0, 1.0, 0.1);
    let settings = Settings::builder().maxiter(2).build();
    assert_eq!(
        solve_with(&request, &settings).unwrap_err(),
        Error::NonConvergence { x: 0.1, maxiter: 2 }
    );
    assert!(solve_with(&request, &Settings::default()).is_ok());
}

#[test]
fn bootstrap_on_constant_slope_is_exact() {
    let c = 3.0;
    let f = move |_x: f64, _y: f64| c;
    let mut state = IntegrationState::new(&f, 0.0, 1.0, 2.0, 0.1);
    let iterations = bootstrap(&mut state, 1e-10, 1000).unwrap();
    assert!(iterations <= 3);
    assert_eq!(state.count(), 2);
    assert!((state.samples()[1] - (2.0 + c * 0.1)).abs() < 1e-12);
}

#[test]
fn milne_step_needs_four_samples() {
    let f = decay;
    let mut state = IntegrationState::new(&f, 0.0, 1.0, 1.0, 0.1);
    bootstrap(&mut state, 1e-10, 1000).unwrap();
    assert!(matches!(step(&mut state), Err(Error::InternalInvariant(_))));
    assert_eq!(state.count(), 2);
}

#[test]
fn solution_reports_statistics() {
    let sol = solve(&decay, 1.0, 0.0, 1.0, 0.1).unwrap();
    assert_eq!(sol.nstep, 7);
    assert!(sol.niter >= 3);
    // One slope per bootstrap point, one per corrector iteration, four per Milne step.
    assert_eq!(sol.nfev, 3 + sol.niter + 4 * sol.nstep);
}
