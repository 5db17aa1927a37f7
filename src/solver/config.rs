//! Shared solver configuration.
//!
//! [`SolveCfg`] fields:
//! ├ `eps`      : convergence tolerance, applied to both the residual and
//! │              the step/width criterion of each method
//! └ `max_iter` : iteration cap, defaults to [`DEFAULT_MAX_ITER`]
//!
//! The cap guarantees termination for any `eps`, so no validation is
//! required and every solver call returns a result.

/// Default iteration cap for all methods.
pub const DEFAULT_MAX_ITER: usize = 200;

#[derive(Debug, Copy, Clone)]
pub struct SolveCfg {
    eps:      f64,
    max_iter: usize,
}

impl SolveCfg {
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps, max_iter: DEFAULT_MAX_ITER }
    }

    #[must_use]
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = v; self }

    #[inline] #[must_use] pub fn eps(&self)      -> f64   { self.eps }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }
}
