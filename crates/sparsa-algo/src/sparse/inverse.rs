//! Gauss-Jordan inversion on the augmented system `[A | I]`.
//!
//! The augmented matrix is held as one [`SparseVector`] per row, so a row
//! swap is a `Vec::swap` and each elimination step touches only the stored
//! entries of the pivot row.
//!
//! ## Algorithm
//!
//! ```text
//! forward:   for i in 0..n
//!              pick row p >= i maximizing |a[p][i]|, swap p <-> i
//!              for k > i:  row_k -= (a[k][i] / a[i][i]) * row_i
//! backward:  for i in (0..n).rev()
//!              a[i][i] == 0  ->  SingularMatrix
//!              row_i /= a[i][i]
//!              for k < i:  row_k -= a[k][i] * row_i
//! result:    right half of the augmented rows
//! ```
//!
//! Eliminated cells are dropped from storage rather than left holding
//! round-off residue, so the left half stays structurally triangular.

use sparsa_core::{InverseConfig, Scalar, SparseError, SparseResult};
use tracing::{debug, trace};

use super::matrix::SparseMatrix;
use super::vector::SparseVector;

impl<T: Scalar> SparseMatrix<T> {
    /// Inverse with exact-zero pivot detection.
    pub fn inverse(&self) -> SparseResult<Self> {
        self.inverse_with(&InverseConfig::default())
    }

    /// Inverse with an explicit pivot tolerance.
    pub fn inverse_with(&self, config: &InverseConfig) -> SparseResult<Self> {
        if !self.is_square() {
            return Err(SparseError::not_square("inverse", self.shape()));
        }
        config.validate()?;

        let n = self.rows();
        debug!(n, nnz = self.nnz(), tolerance = config.pivot_tolerance, "inverting matrix");

        let mut rows = augment(self);
        forward_eliminate(&mut rows, config);
        back_substitute(&mut rows, config)?;

        let mut inverse = Self::new(n, n);
        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.iter().filter(|(j, _)| *j >= n) {
                inverse.set(i, j - n, value);
            }
        }
        Ok(inverse)
    }
}

/// Rows of `[A | I]`, each of length `2n`.
fn augment<T: Scalar>(matrix: &SparseMatrix<T>) -> Vec<SparseVector<T>> {
    let n = matrix.rows();
    (0..n)
        .map(|i| {
            let mut row = SparseVector::new(2 * n);
            for (j, value) in matrix.row_iter(i) {
                row.set(j, value);
            }
            row.set(n + i, T::one());
            row
        })
        .collect()
}

fn forward_eliminate<T: Scalar>(rows: &mut [SparseVector<T>], config: &InverseConfig) {
    let n = rows.len();
    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if rows[k].get(i).abs() > rows[max_row].get(i).abs() {
                max_row = k;
            }
        }
        if max_row != i {
            trace!(column = i, from = max_row, "pivot row swap");
            rows.swap(i, max_row);
        }

        let pivot = rows[i].get(i);
        if config.is_zero_pivot(pivot.magnitude()) {
            // Column is zero from row i down; the backward phase reports it.
            trace!(column = i, "no usable pivot in forward phase");
            continue;
        }

        let pivot_row = rows[i].clone();
        for row in rows.iter_mut().skip(i + 1) {
            let below = row.get(i);
            if below.is_zero() {
                continue;
            }
            row.sub_scaled(below / pivot, &pivot_row);
            row.remove(i);
        }
    }
}

fn back_substitute<T: Scalar>(
    rows: &mut [SparseVector<T>],
    config: &InverseConfig,
) -> SparseResult<()> {
    for i in (0..rows.len()).rev() {
        let divisor = rows[i].get(i);
        if config.is_zero_pivot(divisor.magnitude()) {
            debug!(row = i, "zero pivot, matrix is singular");
            return Err(SparseError::SingularMatrix { row: i });
        }
        rows[i].div_assign_scalar(divisor);
        // exact unit pivot after normalization
        rows[i].set(i, T::one());

        let pivot_row = rows[i].clone();
        for row in rows.iter_mut().take(i) {
            let factor = row.get(i);
            if factor.is_zero() {
                continue;
            }
            row.sub_scaled(factor, &pivot_row);
            row.remove(i);
        }
    }
    Ok(())
}
