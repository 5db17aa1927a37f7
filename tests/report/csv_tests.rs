//! tests for the CSV export layer
use std::fs;
use std::path::PathBuf;

use trisolve::report::io::{save_bisection_csv, save_iteration_csv, save_summary_csv};
use trisolve::report::summary::SummaryRow;
use trisolve::solver::config::SolveCfg;
use trisolve::solver::method::Method;
use trisolve::solver::{solve_bisection, solve_fixed_point, solve_newton};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("trisolve_{name}"))
}

#[test]
fn bisection_csv_header_and_rows() -> TestResult {
    let report = solve_bisection(1.0, 2.0, SolveCfg::new(1e-6))?;
    let path = temp_path("bisection.csv");
    save_bisection_csv(&path, &report)?;

    let text = fs::read_to_string(&path)?;
    fs::remove_file(&path)?;

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("n,a,b,c,f(c)"));
    assert_eq!(text.lines().count(), report.rows.len() + 1);

    // first pass: bracket [1, 2], midpoint 1.5, f(1.5) = 1.375
    assert_eq!(
        lines.next(),
        Some("0,1.000000000000,2.000000000000,1.500000000000,1.375000000000"),
    );
    Ok(())
}

#[test]
fn iteration_csv_header_and_rows() -> TestResult {
    let report = solve_newton(1.5, SolveCfg::new(1e-6));
    let path = temp_path("newton.csv");
    save_iteration_csv(&path, &report)?;

    let text = fs::read_to_string(&path)?;
    fs::remove_file(&path)?;

    assert_eq!(text.lines().next(), Some("n,x,f(x),delta,residual"));
    assert_eq!(text.lines().count(), report.rows.len() + 1);
    Ok(())
}

#[test]
fn summary_csv_shape() -> TestResult {
    let cfg = SolveCfg::new(1e-6);
    let rb = solve_bisection(1.0, 2.0, cfg)?;
    let ri = solve_fixed_point(1.3, cfg);
    let rn = solve_newton(1.5, cfg);

    let rows = vec![
        SummaryRow::from_bisection(&rb),
        SummaryRow::from_iteration(Method::FixedPoint, &ri),
        SummaryRow::from_iteration(Method::Newton, &rn),
    ];

    let path = temp_path("summary.csv");
    save_summary_csv(&path, &rows)?;

    let text = fs::read_to_string(&path)?;
    fs::remove_file(&path)?;

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("method,eps,root,f(root),iterations"));

    let first = lines.next().unwrap();
    assert!(first.starts_with("Bisection,0.000001000000,"));
    assert!(first.ends_with(&format!(",{}", rb.iterations)));

    assert_eq!(text.lines().count(), rows.len() + 1);
    Ok(())
}

#[test]
fn unwritable_path_surfaces_an_error() {
    let report = solve_newton(1.5, SolveCfg::new(1e-6));
    let missing = temp_path("no_such_dir").join("trace.csv");

    assert!(save_iteration_csv(&missing, &report).is_err());
}
