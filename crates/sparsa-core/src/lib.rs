//! # sparsa-core: Foundations for Sparse Matrix Algebra
//!
//! Provides the shared vocabulary used by the algorithm crate:
//!
//! - [`Scalar`] - numeric bound for vector and matrix elements
//! - [`MatrixPos`] / [`Shape`] - composite storage key and fixed matrix shape
//! - [`SparseError`] / [`SparseResult`] - unified, recoverable error type
//! - [`SparsaConfig`] - series truncation and pivot tolerance settings
//!
//! ## Error Taxonomy
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`SparseError::DimensionMismatch`] | add, subtract, matrix-matrix and matrix-vector products |
//! | [`SparseError::DivisionByZero`] | scalar division, normalizing a zero vector |
//! | [`SparseError::InvalidArgument`] | non-square input to power/inverse/log/exp, divergent log series |
//! | [`SparseError::SingularMatrix`] | zero pivot during inversion |
//!
//! All errors are reported at the failing call; no partial results escape.

pub mod config;
pub mod error;
pub mod pos;
pub mod scalar;

pub use config::{InverseConfig, SeriesConfig, SparsaConfig, DEFAULT_SERIES_ORDER};
pub use error::{SparseError, SparseResult};
pub use pos::{MatrixPos, Shape};
pub use scalar::Scalar;
