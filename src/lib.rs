//! Classical root-finding for the cubic f(x) = x^3 - 2.
//!
//! Three methods, each producing a full per-iteration trace:
//! - [`solver::bisection`]   : interval halving on a sign-changing bracket
//! - [`solver::fixed_point`] : x <- phi(x) with a locally contracting phi
//! - [`solver::newton`]      : x <- x - f(x)/f'(x)
//!
//! The solvers are generic over the callables they iterate; [`equation`]
//! holds the fixed cubic, wired in by the `solver::solve_*` entry points.
//! [`report`] serializes traces and a cross-method summary to CSV and to
//! a fixed-width console table.

pub mod equation;
pub mod report;
pub mod solver;
