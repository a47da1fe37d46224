//! Error types for the sag-tension engine.
//!
//! This module provides a unified error type [`SagTensionError`] that covers
//! all error conditions that can occur during catalog parsing, conductor
//! lookup, mechanical analysis and numerical solving.

use thiserror::Error;

use crate::mech::MechAnalysisZone;

/// Result type alias using [`SagTensionError`].
pub type Result<T> = std::result::Result<T, SagTensionError>;

/// Unified error type for all sag-tension operations.
#[derive(Error, Debug)]
pub enum SagTensionError {
    // ============ Catalog Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Two catalog entries share a designation
    #[error("Duplicate conductor designation '{designation}'")]
    DuplicateConductor { designation: String },

    // ============ Lookup Errors ============
    /// Neither a designation nor a legacy code was supplied
    #[error("Need a designation or legacy code to find a conductor")]
    InvalidIdentifierQuery,

    /// No catalog entry matches the query
    #[error("Conductor not found for designation={designation:?} legacy_code={legacy_code:?}")]
    ConductorNotFound {
        designation: Option<String>,
        legacy_code: Option<String>,
    },

    // ============ Analysis Errors ============
    /// Ice load requested for a zone without an ice hypothesis
    #[error("Zone {zone} has no ice hypothesis")]
    InvalidZoneHypothesis { zone: MechAnalysisZone },

    /// Invalid numeric input
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Invalid design hypothesis
    #[error("Invalid hypothesis: {message}")]
    InvalidHypothesis { message: String },

    // ============ Solver Errors ============
    /// Newton-Raphson iteration did not converge
    #[error("Newton-Raphson did not converge after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailure { iterations: usize, residual: f64 },

    /// Derivative vanished during Newton-Raphson iteration
    #[error("Zero derivative at iteration {iteration} (x = {x:.6e})")]
    ZeroDerivative { iteration: usize, x: f64 },

    // ============ I/O Errors ============
    /// Error reading a catalog file
    #[error("Failed to read catalog file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a report
    #[error("Report output error: {source}")]
    OutputError {
        #[from]
        source: std::io::Error,
    },
}

impl SagTensionError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid hypothesis error
    pub fn invalid_hypothesis(message: impl Into<String>) -> Self {
        Self::InvalidHypothesis {
            message: message.into(),
        }
    }

    /// Create a convergence failure error
    pub fn convergence_failure(iterations: usize, residual: f64) -> Self {
        Self::ConvergenceFailure {
            iterations,
            residual,
        }
    }

    /// True for failures raised by the root finder.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(
            self,
            Self::ConvergenceFailure { .. } | Self::ZeroDerivative { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SagTensionError::InvalidZoneHypothesis {
            zone: MechAnalysisZone::A,
        };
        assert_eq!(err.to_string(), "Zone A has no ice hypothesis");

        let err = SagTensionError::parse(3, "unknown directive: .foo");
        assert_eq!(err.to_string(), "Parse error at line 3: unknown directive: .foo");
    }

    #[test]
    fn test_convergence_kinds() {
        assert!(SagTensionError::convergence_failure(50, 1.0).is_convergence_failure());
        assert!(SagTensionError::ZeroDerivative { iteration: 0, x: 0.0 }.is_convergence_failure());
        assert!(!SagTensionError::InvalidIdentifierQuery.is_convergence_failure());
    }
}
