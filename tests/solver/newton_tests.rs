//! tests for the Newton solver
use approx::assert_abs_diff_eq;

use trisolve::solver::config::SolveCfg;
use trisolve::solver::newton::newton;
use trisolve::solver::solve_newton;

const CBRT_2: f64 = 1.2599210498948732;

#[test]
fn quadratic_convergence_from_default_start() {
    let res = solve_newton(1.5, SolveCfg::new(1e-11));

    assert!(res.iterations < 10);
    assert_abs_diff_eq!(res.root, CBRT_2, epsilon = 1e-9);
}

#[test]
fn row_indices_increase_from_zero() {
    let res = solve_newton(1.5, SolveCfg::new(1e-11));

    assert!(!res.rows.is_empty());
    for (i, row) in res.rows.iter().enumerate() {
        assert_eq!(row.n, i);
    }
}

#[test]
fn iteration_count_matches_satisfying_row() {
    let res = solve_newton(1.5, SolveCfg::new(1e-11));

    let last = res.rows.last().unwrap();
    assert_eq!(res.iterations, last.n + 1);
    assert_eq!(res.root, last.x);
    assert_eq!(res.f_root, last.fx);
}

#[test]
fn derivative_guard_fires_before_first_row() {
    // f'(0) = 0: the loop exits before recording anything
    let res = solve_newton(0.0, SolveCfg::new(1e-6));

    assert_eq!(res.iterations, 0);
    assert!(res.rows.is_empty());
    assert_eq!(res.root, 0.0);
    assert_eq!(res.f_root, -2.0);
}

#[test]
fn guard_mid_iteration_keeps_accumulated_rows() {
    let f = |_x: f64| 1.0;
    let mut calls = 0;
    let df = move |_x: f64| {
        calls += 1;
        if calls == 1 { 1.0 } else { 0.0 }
    };

    let res = newton(f, df, 5.0, SolveCfg::new(1e-30));

    // one step recorded, then the guard ended the loop
    assert_eq!(res.rows.len(), 1);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 4.0);
}

#[test]
fn cap_exhaustion_counts_recorded_rows() {
    let res = solve_newton(1.5, SolveCfg::new(1e-30).with_max_iter(1));

    assert_eq!(res.iterations, 1);
    assert_eq!(res.rows.len(), 1);
    assert_eq!(res.root, res.rows[0].x);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let cfg = SolveCfg::new(1e-11);
    let first  = solve_newton(1.5, cfg);
    let second = solve_newton(1.5, cfg);

    assert_eq!(first, second);
}

#[test]
fn generic_over_other_functions() {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, df, 1.0, SolveCfg::new(1e-12));

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-10);
}
