//! Error types for wrapmat

use thiserror::Error;

/// Result type alias using wrapmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wrapmat operations
///
/// Arithmetic overflow is deliberately absent: every element operation wraps
/// modulo 2^32 and that is the defined result, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Context is unconfigured or was given an unusable parameter
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration
        reason: String,
    },

    /// Operand order does not match the order the operation runs at
    #[error("Incompatible dimensions: expected order {expected}, got {got}")]
    ShapeMismatch {
        /// Order required by the operation
        expected: usize,
        /// Order of the offending operand
        got: usize,
    },

    /// Reduction is undefined on a matrix with no elements
    #[error("Operation '{op}' is undefined on empty input")]
    EmptyInput {
        /// The operation name
        op: &'static str,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { expected, got }
    }
}
