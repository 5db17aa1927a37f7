// shared solver support
pub mod config;
pub mod method;
pub mod report;

// methods
pub mod bisection;
pub mod fixed_point;
pub mod newton;

use crate::equation;
use self::config::SolveCfg;
use self::report::{BisectionReport, IterationReport};

/// Solve f(x) = x^3 - 2 on `[a0, b0]` by bisection.
pub fn solve_bisection(
    a0: f64,
    b0: f64,
    cfg: SolveCfg,
) -> Result<BisectionReport, bisection::BisectionError> {
    bisection::bisection(equation::f, a0, b0, cfg)
}

/// Solve f(x) = x^3 - 2 by fixed-point iteration from `x0`.
pub fn solve_fixed_point(x0: f64, cfg: SolveCfg) -> IterationReport {
    fixed_point::fixed_point(equation::phi, equation::f, x0, cfg)
}

/// Solve f(x) = x^3 - 2 by Newton's method from `x0`.
pub fn solve_newton(x0: f64, cfg: SolveCfg) -> IterationReport {
    newton::newton(equation::f, equation::df, x0, cfg)
}
