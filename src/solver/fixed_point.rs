//! Fixed-point iteration

use super::config::SolveCfg;
use super::report::{IterRow, IterationReport};

/// Iterates with magnitude below this are substituted before applying `phi`.
const NEAR_ZERO: f64 = 1e-14;

/// Replacement value for a near-zero iterate, keeping 2/x^2 representable.
const NEAR_ZERO_SUBSTITUTE: f64 = 1e-6;

/// Finds a root of `f` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// x <- phi(x), recording one [`IterRow`] per pass.
///
/// # Arguments
/// ┌ `phi` - iteration mapping; a root of `f` must be a fixed point of `phi`
/// ├ `f`   - function whose root is sought, evaluated for the residual
/// ├ `x0`  - initial estimate
/// └ `cfg` - tolerance `eps` and iteration cap. See [`SolveCfg`]
///
/// # Returns
/// An [`IterationReport`]. Each pass stops as soon as the step size
/// `|x_{n+1} - x_n| < eps` or the residual `|f(x_{n+1})| < eps`. If the
/// cap runs out, the root is the last computed estimate and the count
/// equals the cap.
///
/// # Notes
/// ├ An iterate with `|x| < 1e-14` is replaced by `1e-6` before the next
/// │   step, so a mapping with a pole at zero cannot blow up. This is a
/// │   substitution, never an error.
/// └ Convergence is local only: it requires `|phi'(root)| < 1` and an
///   initial estimate close enough to the root.
pub fn fixed_point<P, F>(
    mut phi: P,
    mut f: F,
    x0: f64,
    cfg: SolveCfg,
) -> IterationReport
where
    P: FnMut(f64) -> f64,
    F: FnMut(f64) -> f64,
{
    let eps      = cfg.eps();
    let max_iter = cfg.max_iter();

    let mut rows = Vec::new();
    let mut x = x0;
    for n in 0..max_iter {
        if x.abs() < NEAR_ZERO {
            x = NEAR_ZERO_SUBSTITUTE;
        }

        let x_next   = phi(x);
        let delta    = (x_next - x).abs();
        let fx       = f(x_next);
        let residual = fx.abs();
        rows.push(IterRow { n, x: x_next, fx, delta, residual });

        if delta < eps || residual < eps {
            return IterationReport {
                root       : x_next,
                f_root     : fx,
                iterations : n + 1,
                eps,
                rows,
            };
        }
        x = x_next;
    }

    IterationReport {
        root       : x,
        f_root     : f(x),
        iterations : max_iter,
        eps,
        rows,
    }
}
