//! # sparsa-algo: Sparse Matrix Algebra
//!
//! Generic sparse vectors and matrices over any [`Scalar`] element type,
//! with the numerical algorithms built on them.
//!
//! | Operation | Method | Fails with |
//! |-----------|--------|------------|
//! | Sum / difference | [`SparseMatrix::try_add`], [`SparseMatrix::try_sub`] | `DimensionMismatch` |
//! | Scalar multiply / divide | [`SparseMatrix::scale`], [`SparseMatrix::div_scalar`] | `DivisionByZero` (divide only) |
//! | Products | [`SparseMatrix::mul_vec`], [`SparseMatrix::matmul`] | `DimensionMismatch` |
//! | Integer power | [`SparseMatrix::power_int`] | `InvalidArgument` |
//! | Inverse | [`SparseMatrix::inverse`] | `InvalidArgument`, `SingularMatrix` |
//! | Log / exp / power | [`SparseMatrix::log`], [`SparseMatrix::exp`], [`SparseMatrix::power`] | `InvalidArgument` |
//!
//! ## Example
//!
//! ```
//! use sparsa_algo::{SparseMatrix, SeriesConfig};
//!
//! let a = SparseMatrix::from_triplets(2, 2, [(0, 0, 0.3), (1, 1, 0.3), (0, 1, 0.05)])?;
//! let log = a.log()?;
//! let back = log.exp_with(&SeriesConfig::with_order(60))?;
//! assert!(back.approx_eq(&a, 1e-9));
//! # Ok::<(), sparsa_algo::SparseError>(())
//! ```
//!
//! No threads are spawned and nothing blocks; each value exclusively owns
//! its entry storage.

pub mod sparse;

pub use sparsa_core::{
    InverseConfig, MatrixPos, Scalar, SeriesConfig, Shape, SparsaConfig, SparseError,
    SparseResult,
};
pub use sparse::{SparseMatrix, SparseVector};
