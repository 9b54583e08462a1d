//! Unified error type for sparse algebra operations
//!
//! Every fallible operation in the workspace returns [`SparseResult`], so
//! callers can propagate shape, arithmetic and convergence failures with `?`
//! and recover from them like any other value.
//!
//! # Example
//!
//! ```ignore
//! use sparsa_core::{SparseError, SparseResult};
//!
//! fn residual(a: &SparseMatrix<f64>, b: &SparseMatrix<f64>) -> SparseResult<f64> {
//!     let diff = a.try_sub(b)?;
//!     Ok(diff.frobenius_norm())
//! }
//! ```

use thiserror::Error;

use crate::pos::Shape;

/// Unified error type for all sparse algebra operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SparseError {
    /// Operand shapes are incompatible for the requested operation
    #[error("Dimension mismatch in {op}: {left} vs {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    /// Scalar division by zero, or normalization of a zero vector
    #[error("Division by zero in {0}")]
    DivisionByZero(&'static str),

    /// Operation precondition violated (non-square input, divergent series, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Zero pivot met during the backward elimination phase
    #[error("Matrix is singular: zero pivot at row {row}")]
    SingularMatrix { row: usize },

    /// Checked accessor called with a position outside the shape
    #[error("Index {index} out of bounds (bound {bound})")]
    IndexOutOfBounds { index: usize, bound: usize },

    /// Configuration parsing or validation errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results using SparseError.
pub type SparseResult<T> = Result<T, SparseError>;

impl SparseError {
    /// Build a [`SparseError::DimensionMismatch`] for a binary operation.
    pub fn mismatch(op: &'static str, left: Shape, right: Shape) -> Self {
        SparseError::DimensionMismatch { op, left, right }
    }

    /// Build the error reported when a square matrix is required.
    pub fn not_square(op: &str, shape: Shape) -> Self {
        SparseError::InvalidArgument(format!("{} requires a square matrix, got {}", op, shape))
    }
}

// JSON parsing errors
impl From<serde_json::Error> for SparseError {
    fn from(err: serde_json::Error) -> Self {
        SparseError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SparseError::mismatch("subtract", Shape::new(2, 3), Shape::new(3, 2));
        let msg = err.to_string();
        assert!(msg.contains("Dimension mismatch"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("3x2"));
    }

    #[test]
    fn test_not_square_message() {
        let err = SparseError::not_square("inverse", Shape::new(2, 4));
        assert!(matches!(err, SparseError::InvalidArgument(_)));
        assert!(err.to_string().contains("inverse"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SparseError = json_err.into();
        assert!(matches!(err, SparseError::Config(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> SparseResult<()> {
            Err(SparseError::SingularMatrix { row: 1 })
        }

        fn outer() -> SparseResult<()> {
            inner()?;
            Ok(())
        }

        assert_eq!(outer(), Err(SparseError::SingularMatrix { row: 1 }));
    }
}
