//! Cross-method summary rows, aggregated from solver reports.

use crate::solver::method::Method;
use crate::solver::report::{BisectionReport, IterationReport};

/// One line of the cross-method summary: method, tolerance and outcome.
/// One row exists per (method, eps) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub method     : Method,
    pub eps        : f64,
    pub root       : f64,
    pub f_root     : f64,
    pub iterations : usize,
}

impl SummaryRow {
    /// Summary line for a bisection run.
    pub fn from_bisection(report: &BisectionReport) -> Self {
        Self {
            method     : Method::Bisection,
            eps        : report.eps,
            root       : report.root,
            f_root     : report.f_root,
            iterations : report.iterations,
        }
    }

    /// Summary line for a fixed-point or Newton run.
    pub fn from_iteration(method: Method, report: &IterationReport) -> Self {
        Self {
            method,
            eps        : report.eps,
            root       : report.root,
            f_root     : report.f_root,
            iterations : report.iterations,
        }
    }
}
