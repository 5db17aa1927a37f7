//! Driver: run all three methods at two tolerances on the fixed inputs,
//! export the iteration tables and the summary, and print the summary.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trisolve::report::console::print_summary;
use trisolve::report::io::{save_bisection_csv, save_iteration_csv, save_summary_csv};
use trisolve::report::summary::SummaryRow;
use trisolve::solver::config::SolveCfg;
use trisolve::solver::method::Method;
use trisolve::solver::{solve_bisection, solve_fixed_point, solve_newton};

const RESULTS_DIR: &str = "results";

// fixed starting data: f(1) < 0 < f(2), and both open-method starts
// lie close enough to the root for local convergence
const BRACKET: (f64, f64) = (1.0, 2.0);
const FIXED_POINT_START: f64 = 1.3;
const NEWTON_START: f64 = 1.5;

/// `1e-6` style tag used in output filenames.
fn eps_label(eps: f64) -> String {
    format!("{eps:e}")
}

fn run_series(dir: &Path, eps: f64, summary: &mut Vec<SummaryRow>) -> anyhow::Result<()> {
    let cfg   = SolveCfg::new(eps);
    let label = eps_label(eps);

    let rb = solve_bisection(BRACKET.0, BRACKET.1, cfg)
        .with_context(|| format!("bisection on [{}, {}]", BRACKET.0, BRACKET.1))?;
    let ri = solve_fixed_point(FIXED_POINT_START, cfg);
    let rn = solve_newton(NEWTON_START, cfg);

    info!(eps, root = rb.root, f_root = rb.f_root, iterations = rb.iterations, "bisection");
    info!(eps, root = ri.root, f_root = ri.f_root, iterations = ri.iterations, "fixed-point");
    info!(eps, root = rn.root, f_root = rn.f_root, iterations = rn.iterations, "newton");

    save_bisection_csv(dir.join(format!("bisection_eps{label}.csv")), &rb)?;
    save_iteration_csv(dir.join(format!("iter_eps{label}.csv")), &ri)?;
    save_iteration_csv(dir.join(format!("newton_eps{label}.csv")), &rn)?;

    summary.push(SummaryRow::from_bisection(&rb));
    summary.push(SummaryRow::from_iteration(Method::FixedPoint, &ri));
    summary.push(SummaryRow::from_iteration(Method::Newton, &rn));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let dir = Path::new(RESULTS_DIR);
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut summary = Vec::new();
    for eps in [1e-6, 1e-11] {
        run_series(dir, eps, &mut summary)?;
    }

    print_summary(&summary);
    save_summary_csv(dir.join("summary.csv"), &summary).context("writing summary.csv")?;
    info!("iteration tables written to ./{RESULTS_DIR}/");

    Ok(())
}
