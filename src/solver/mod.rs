//! Scalar root finding.
//!
//! The catenary change-of-state equation is a cubic in the unknown tension,
//! solved here with a bounded Newton-Raphson iteration:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! Iteration stops when the point update falls below the tolerance. A
//! vanishing derivative or an exhausted iteration budget is reported as an
//! error rather than returning the last iterate.

mod newton;

pub use newton::{find_root, NewtonRaphson};

/// Convergence tolerance on the Newton-Raphson point update.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Maximum Newton-Raphson iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Derivatives below this magnitude are treated as zero.
pub const MIN_DERIVATIVE: f64 = 1e-12;
