//! CSV export of iteration traces and the cross-method summary.
//!
//! Every floating-point cell is written as a fixed-point decimal with
//! 12 digits, matching the console output precision.

use std::path::Path;

use csv::Writer;
use thiserror::Error;
use tracing::debug;

use super::summary::SummaryRow;
use crate::solver::report::{BisectionReport, IterationReport};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-point rendering used for every float cell.
#[inline]
fn cell(v: f64) -> String {
    format!("{v:.12}")
}

/// Writes a bisection trace with header `n,a,b,c,f(c)`, one row per pass.
pub fn save_bisection_csv<P: AsRef<Path>>(
    path: P,
    report: &BisectionReport,
) -> Result<(), ExportError> {
    let mut out = Writer::from_path(&path)?;
    out.write_record(["n", "a", "b", "c", "f(c)"])?;
    for row in &report.rows {
        out.write_record([
            row.n.to_string(),
            cell(row.a),
            cell(row.b),
            cell(row.c),
            cell(row.fc),
        ])?;
    }
    out.flush()?;
    debug!(path = %path.as_ref().display(), rows = report.rows.len(), "bisection trace written");
    Ok(())
}

/// Writes a fixed-point/Newton trace with header `n,x,f(x),delta,residual`.
pub fn save_iteration_csv<P: AsRef<Path>>(
    path: P,
    report: &IterationReport,
) -> Result<(), ExportError> {
    let mut out = Writer::from_path(&path)?;
    out.write_record(["n", "x", "f(x)", "delta", "residual"])?;
    for row in &report.rows {
        out.write_record([
            row.n.to_string(),
            cell(row.x),
            cell(row.fx),
            cell(row.delta),
            cell(row.residual),
        ])?;
    }
    out.flush()?;
    debug!(path = %path.as_ref().display(), rows = report.rows.len(), "iteration trace written");
    Ok(())
}

/// Writes the cross-method summary with header `method,eps,root,f(root),iterations`.
pub fn save_summary_csv<P: AsRef<Path>>(
    path: P,
    rows: &[SummaryRow],
) -> Result<(), ExportError> {
    let mut out = Writer::from_path(&path)?;
    out.write_record(["method", "eps", "root", "f(root)", "iterations"])?;
    for row in rows {
        out.write_record([
            row.method.to_string(),
            cell(row.eps),
            cell(row.root),
            cell(row.f_root),
            row.iterations.to_string(),
        ])?;
    }
    out.flush()?;
    debug!(path = %path.as_ref().display(), rows = rows.len(), "summary written");
    Ok(())
}
