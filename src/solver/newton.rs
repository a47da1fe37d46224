//! Newton-Raphson iteration for scalar equations.

use tracing::trace;

use super::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, MIN_DERIVATIVE};
use crate::error::{Result, SagTensionError};

/// Newton-Raphson solver for `f(x) = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRaphson {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Convergence tolerance on the point update
    pub tolerance: f64,
}

impl Default for NewtonRaphson {
    fn default() -> Self {
        Self::new()
    }
}

impl NewtonRaphson {
    /// Create a new Newton-Raphson solver with default settings.
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Find a root of `f` starting from `x0`.
    ///
    /// `df` must be the derivative of `f`. Returns the first iterate whose
    /// update is within the tolerance.
    ///
    /// # Errors
    ///
    /// - [`SagTensionError::ZeroDerivative`] if `|df(x)|` vanishes at an iterate.
    /// - [`SagTensionError::ConvergenceFailure`] if the iteration budget runs
    ///   out or an iterate stops being finite.
    pub fn solve<F, D>(&self, f: F, df: D, x0: f64) -> Result<f64>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let mut x = x0;
        let mut step = f64::INFINITY;

        for iter in 0..self.max_iterations {
            let fx = f(x);
            if fx == 0.0 {
                trace!(iter, x, "exact root");
                return Ok(x);
            }

            let dfx = df(x);
            if dfx.is_nan() || dfx.abs() < MIN_DERIVATIVE {
                return Err(SagTensionError::ZeroDerivative { iteration: iter, x });
            }

            let x_next = x - fx / dfx;
            if !x_next.is_finite() {
                return Err(SagTensionError::convergence_failure(iter + 1, fx.abs()));
            }

            step = (x_next - x).abs();
            trace!(iter, x = x_next, residual = fx, step, "newton step");
            x = x_next;

            if step <= self.tolerance {
                return Ok(x);
            }
        }

        Err(SagTensionError::convergence_failure(self.max_iterations, step))
    }
}

/// Find a root of `f` from `x0` with the default solver settings.
pub fn find_root<F, D>(f: F, df: D, x0: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    NewtonRaphson::new().solve(f, df, x0)
}
