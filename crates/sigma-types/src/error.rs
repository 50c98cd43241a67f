//! Error types for sigma.
//!
//! The decomposition operations themselves are total and never fail.
//! Errors come from opt-in input validation, configuration loading,
//! and the command-line front end.

use thiserror::Error;

/// Unified error type for sigma.
#[derive(Debug, Error)]
pub enum SigmaError {
    /// A matrix entry is NaN or infinite.
    #[error("Non-finite matrix entry at ({row}, {col}): {value}")]
    NonFinite {
        row: usize,
        col: usize,
        value: f64,
    },

    /// A degeneracy tolerance is zero, negative, or not finite.
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied argument is outside its documented domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, SigmaError>`.
pub type SigmaResult<T> = Result<T, SigmaError>;
