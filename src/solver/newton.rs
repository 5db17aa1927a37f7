//! Newton-Raphson method

use super::config::SolveCfg;
use super::report::{IterRow, IterationReport};

/// Derivative magnitudes below this floor stop the iteration: the step
/// -f(x)/f'(x) is no longer reliable.
const DERIVATIVE_FLOOR: f64 = 1e-14;

/// Finds a root of `f` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with an analytic derivative, recording one [`IterRow`] per pass.
///
/// # Arguments
/// ┌ `f`   - function whose root is sought
/// ├ `df`  - analytic derivative of `f`
/// ├ `x0`  - initial estimate
/// └ `cfg` - tolerance `eps` and iteration cap. See [`SolveCfg`]
///
/// # Returns
/// An [`IterationReport`]. Each pass stops as soon as the step size
/// `|x_{n+1} - x_n| < eps` or the residual `|f(x_{n+1})| < eps`. On cap
/// exhaustion, or when the derivative guard exits the loop, the root is
/// the last valid estimate and the iteration count is the number of rows
/// actually recorded.
///
/// # Notes
/// ├ `|f'(x)| < 1e-14` ends the loop silently: no error is raised, the
/// │   report keeps whatever rows were accumulated. If the guard fires
/// │   before the first step, the count is 0 and the root is `x0`.
/// └ Quadratic convergence requires a good initial estimate and smooth
///   `f`; for guaranteed convergence prefer a bracketed method.
pub fn newton<F, G>(
    mut f: F,
    mut df: G,
    x0: f64,
    cfg: SolveCfg,
) -> IterationReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let eps      = cfg.eps();
    let max_iter = cfg.max_iter();

    let mut rows = Vec::new();
    let mut x = x0;
    for n in 0..max_iter {
        let y  = f(x);
        let dy = df(x);
        if dy.abs() < DERIVATIVE_FLOOR {
            break;
        }

        let x_next   = x - y / dy;
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

    // cap exhausted or the derivative guard fired
    IterationReport {
        root       : x,
        f_root     : f(x),
        iterations : rows.len(),
        eps,
        rows,
    }
}
