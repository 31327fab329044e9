//! Error types for satstream

use std::time::Duration;

use thiserror::Error;

/// Main error type for satstream operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SatStreamError {
    /// Failure reported by the underlying solver engine
    #[error("Solver backend error: {0}")]
    Backend(String),

    /// A model was requested without an immediately preceding `Sat` verdict
    #[error("No model available: the last check did not report sat")]
    ModelUnavailable,

    /// The model has no assignment for the requested variable
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// A satisfiability check did not finish before its deadline
    #[error("Satisfiability check timed out after {0:?}")]
    Timeout(Duration),

    /// Enumeration was requested over an empty variable list and the
    /// configuration rejects that
    #[error("No variables of interest given")]
    NoVariables,

    /// Failure produced by an input stream or a caller-supplied function
    #[error("Upstream error: {0}")]
    Upstream(String),
}

/// Result type alias for satstream operations
pub type Result<T> = std::result::Result<T, SatStreamError>;
