//! Bisection method

use super::config::SolveCfg;
use super::report::{BisectionReport, BisectionRow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error("invalid interval: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },
}

/// Midpoint of [a, b]
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}

/// Finds a root of `f` on `[a0, b0]` by
/// [bisection](https://en.wikipedia.org/wiki/Bisection_method),
/// recording one [`BisectionRow`] per pass.
///
/// # Arguments
/// ┌ `f`   - function whose root is sought; must change sign on the interval
/// ├ `a0`  - left bound, finite and less than `b0`
/// ├ `b0`  - right bound, finite and greater than `a0`
/// └ `cfg` - tolerance `eps` and iteration cap. See [`SolveCfg`]
///
/// # Returns
/// A [`BisectionReport`] holding the root estimate, f at the root, the
/// iteration count, `eps`, and the full row trace. Each pass stops as soon
/// as `|f(c)| < eps` or `(b - a)/2 < eps`; both are checked together, so
/// either criterion independently suffices. If the cap runs out, the root
/// is the midpoint of the final bracket and the count equals the cap.
///
/// # Errors
/// ┌ [`BisectionError::InvalidInterval`] - `a0` or `b0` non-finite, or `a0 >= b0`
/// └ [`BisectionError::NoSignChange`]    - `f(a0) * f(b0) > 0`, root not bracketed
///
/// # Notes
/// └ A zero at either endpoint passes the sign test: only a strictly
///   positive product rejects the bracket.
pub fn bisection<F>(
    mut f: F,
    a0: f64,
    b0: f64,
    cfg: SolveCfg,
) -> Result<BisectionReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a0.is_finite() && b0.is_finite()) || a0 >= b0 {
        return Err(BisectionError::InvalidInterval { a: a0, b: b0 });
    }

    let eps      = cfg.eps();
    let max_iter = cfg.max_iter();

    let mut a  = a0;
    let mut b  = b0;
    let mut fa = f(a);
    let fb     = f(b);
    if fa * fb > 0.0 {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut rows = Vec::new();
    for n in 0..max_iter {
        let c  = midpoint(a, b);
        let fc = f(c);
        rows.push(BisectionRow { n, a, b, c, fc });

        if fc.abs() < eps || 0.5 * (b - a) < eps {
            return Ok(BisectionReport {
                root       : c,
                f_root     : fc,
                iterations : n + 1,
                eps,
                rows,
            });
        }

        // keep the half on which the sign still changes
        if fa * fc < 0.0 {
            b = c;
        } else {
            a  = c;
            fa = fc;
        }
    }

    // cap exhausted; best estimate is the midpoint of the final bracket
    let c = midpoint(a, b);
    Ok(BisectionReport {
        root       : c,
        f_root     : f(c),
        iterations : max_iter,
        eps,
        rows,
    })
}
