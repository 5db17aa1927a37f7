//! Fixed-width console rendering of the cross-method summary.

use std::fmt::Write;

use super::summary::SummaryRow;

const COL_METHOD: usize = 14;
const COL_EPS:    usize = 16;
const COL_ROOT:   usize = 20;
const COL_FVAL:   usize = 20;
const COL_ITERS:  usize = 12;

/// Renders the summary as a fixed-width text table, one line per row.
pub fn format_summary(rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    out.push_str("=== SUMMARY (by method and eps) ===\n");

    let _ = writeln!(
        out,
        "{:<COL_METHOD$}{:<COL_EPS$}{:<COL_ROOT$}{:<COL_FVAL$}{:<COL_ITERS$}",
        "Method", "eps", "root", "f(root)", "iterations",
    );
    out.push_str(&"-".repeat(COL_METHOD + COL_EPS + COL_ROOT + COL_FVAL + COL_ITERS));
    out.push('\n');

    for row in rows {
        let _ = writeln!(
            out,
            "{:<COL_METHOD$}{:<COL_EPS$.12}{:<COL_ROOT$.12}{:<COL_FVAL$.12}{:<COL_ITERS$}",
            row.method.method_name(),
            row.eps,
            row.root,
            row.f_root,
            row.iterations,
        );
    }
    out
}

/// Prints the summary table to stdout.
pub fn print_summary(rows: &[SummaryRow]) {
    print!("{}", format_summary(rows));
}
