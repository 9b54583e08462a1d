//! # Sparse Vector and Matrix Algebra
//!
//! Only explicitly assigned entries are stored; every other position reads
//! as zero. All algebra is value-semantic and returns new owned values.
//!
//! ## Module Organization
//!
//! - [`vector`]: fixed-length [`SparseVector`] with add, dot, normalize
//! - [`matrix`]: fixed-shape [`SparseMatrix`] storage, arithmetic, products,
//!   transpose and integer powers
//! - [`inverse`]: Gauss-Jordan inversion with partial pivoting
//! - [`series`]: matrix log, exp and fractional power by truncated series
//! - [`display`]: line listings of explicit entries
//!
//! ## Usage
//!
//! ```
//! use sparsa_algo::sparse::{SparseMatrix, SparseVector};
//!
//! let a = SparseMatrix::from_triplets(2, 2, [(0, 0, 2.0), (1, 1, 4.0)])?;
//! let x = SparseVector::from_entries(2, [(0, 1.0), (1, 1.0)])?;
//!
//! let y = a.mul_vec(&x)?;
//! assert_eq!(y.get(1), 4.0);
//!
//! let inv = a.inverse()?;
//! assert_eq!(inv.get(1, 1), 0.25);
//! # Ok::<(), sparsa_algo::SparseError>(())
//! ```

pub mod display;
pub mod inverse;
pub mod matrix;
pub mod series;
pub mod vector;

pub use matrix::SparseMatrix;
pub use vector::SparseVector;
