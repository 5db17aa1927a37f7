//! Iteration traces and result records returned by the solvers.
//!
//! Rows are appended once per loop pass, ordered by `n` starting at 0
//! with no gaps. A report is built incrementally by its solver and is
//! immutable once returned; the caller owns it outright.

/// One bisection pass: the bracket before shrinking, its midpoint and f there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionRow {
    pub n:  usize, // iteration index, from 0
    pub a:  f64,   // left bound
    pub b:  f64,   // right bound
    pub c:  f64,   // midpoint
    pub fc: f64,   // f(c)
}

/// One open-method pass (fixed-point, Newton): the new estimate and step data.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterRow {
    pub n:        usize, // iteration index, from 0
    pub x:        f64,   // estimate after this step
    pub fx:       f64,   // f(x)
    pub delta:    f64,   // |x_{n+1} - x_n|
    pub residual: f64,   // |f(x_{n+1})|
}

/// Final record of a bisection run.
///
/// `iterations` is the index of the row that satisfied the stopping
/// criterion plus one, or the iteration cap if no row did.
#[derive(Debug, Clone, PartialEq)]
pub struct BisectionReport {
    pub root       : f64,
    pub f_root     : f64,
    pub iterations : usize,
    pub eps        : f64,
    pub rows       : Vec<BisectionRow>,
}

/// Final record of an open-method run, shared by fixed-point and Newton.
///
/// For Newton, `iterations` equals the number of recorded rows, which is
/// 0 when the derivative guard fires before the first step.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub root       : f64,
    pub f_root     : f64,
    pub iterations : usize,
    pub eps        : f64,
    pub rows       : Vec<IterRow>,
}
