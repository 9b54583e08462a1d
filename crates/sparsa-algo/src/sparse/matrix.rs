//! Fixed-shape sparse matrix with value-semantic algebra.
//!
//! Entries live in a `BTreeMap` keyed by [`MatrixPos`], so storage is
//! row-major ordered: the entries of row `r` form one contiguous key range,
//! which the matrix product uses instead of a separate row index.
//!
//! ```text
//! A (3x3, nnz = 4)          storage
//! ┌ 1 . 2 ┐                 (0,0) -> 1
//! │ . . . │                 (0,2) -> 2
//! └ 3 . 4 ┘                 (2,0) -> 3
//!                           (2,2) -> 4
//! ```
//!
//! Every arithmetic operation returns a new matrix; only the write accessors,
//! [`SparseMatrix::apply`] and [`SparseMatrix::prune_zeros`] mutate in place.

use sparsa_core::{MatrixPos, Scalar, Shape, SparseError, SparseResult};
use std::collections::BTreeMap;
use std::ops::{Mul, Neg};
use tracing::trace;

use super::vector::SparseVector;

/// Sparse matrix over an ordered `(row, col) -> value` map.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T> {
    shape: Shape,
    entries: BTreeMap<MatrixPos, T>,
}

impl<T: Scalar> SparseMatrix<T> {
    /// Create an all-zero `rows x cols` matrix with no explicit entries.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            entries: BTreeMap::new(),
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::new(n, n);
        for i in 0..n {
            eye.entries.insert(MatrixPos::new(i, i), T::one());
        }
        eye
    }

    /// Build a matrix from `(row, col, value)` triplets. Later duplicates
    /// overwrite earlier ones.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> SparseResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.try_set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn is_square(&self) -> bool {
        self.shape.is_square()
    }

    /// Number of explicitly stored entries (including stored zeros).
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries over total cells.
    pub fn density(&self) -> f64 {
        if self.shape.is_empty() {
            return 0.0;
        }
        self.nnz() as f64 / (self.rows() as f64 * self.cols() as f64)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&MatrixPos::new(row, col))
    }

    /// Value at `(row, col)`, zero when not materialized.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the shape.
    pub fn get(&self, row: usize, col: usize) -> T {
        let pos = self.checked_pos(row, col);
        self.entries.get(&pos).copied().unwrap_or_else(T::zero)
    }

    /// Mutable reference to `(row, col)`, inserting a zero entry first if
    /// none is stored.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the shape.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> &mut T {
        let pos = self.checked_pos(row, col);
        self.entries.entry(pos).or_insert_with(T::zero)
    }

    /// Assign `value` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        *self.entry_mut(row, col) = value;
    }

    /// Checked form of [`SparseMatrix::set`].
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> SparseResult<()> {
        if row >= self.shape.rows {
            return Err(SparseError::IndexOutOfBounds {
                index: row,
                bound: self.shape.rows,
            });
        }
        if col >= self.shape.cols {
            return Err(SparseError::IndexOutOfBounds {
                index: col,
                bound: self.shape.cols,
            });
        }
        self.entries.insert(MatrixPos::new(row, col), value);
        Ok(())
    }

    /// Explicit entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (MatrixPos, T)> + '_ {
        self.entries.iter().map(|(&pos, &v)| (pos, v))
    }

    /// Explicit entries of a single row as `(col, value)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` lies outside the shape.
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        assert!(
            row < self.shape.rows,
            "row {} out of bounds for {} sparse matrix",
            row,
            self.shape
        );
        self.entries
            .range(MatrixPos::new(row, 0)..MatrixPos::new(row + 1, 0))
            .map(|(pos, &v)| (pos.col, v))
    }

    /// Replace every stored value with `f(value)`; implicit zeros are not
    /// visited.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        for value in self.entries.values_mut() {
            *value = f(*value);
        }
    }

    /// Remove explicitly stored zeros.
    pub fn prune_zeros(&mut self) {
        self.entries.retain(|_, v| !v.is_zero());
    }

    /// Whether the matrix equals the identity of its (square) shape.
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let diagonal_ok = (0..self.rows()).all(|i| self.get(i, i).is_one());
        diagonal_ok
            && self
                .entries
                .iter()
                .filter(|(pos, _)| !pos.is_diagonal())
                .all(|(_, v)| v.is_zero())
    }

    /// Element-wise sum over the union of explicit positions.
    pub fn try_add(&self, other: &Self) -> SparseResult<Self> {
        self.check_same_shape("add", other)?;
        let mut result = self.clone();
        for (pos, value) in other.iter() {
            match result.entries.get_mut(&pos) {
                Some(existing) => *existing += value,
                None => {
                    result.entries.insert(pos, value);
                }
            }
        }
        Ok(result)
    }

    /// Element-wise difference over the union of explicit positions.
    pub fn try_sub(&self, other: &Self) -> SparseResult<Self> {
        self.check_same_shape("subtract", other)?;
        let mut result = self.clone();
        for (pos, value) in other.iter() {
            match result.entries.get_mut(&pos) {
                Some(existing) => *existing -= value,
                None => {
                    result.entries.insert(pos, -value);
                }
            }
        }
        Ok(result)
    }

    /// Multiply every stored entry by `scalar`. Scaling by zero is allowed
    /// and keeps the stored positions.
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = self.clone();
        result.apply(|v| v * scalar);
        result
    }

    /// Divide every stored entry by `scalar`.
    pub fn div_scalar(&self, scalar: T) -> SparseResult<Self> {
        if scalar.is_zero() {
            return Err(SparseError::DivisionByZero("matrix / scalar"));
        }
        let mut result = self.clone();
        result.apply(|v| v / scalar);
        Ok(result)
    }

    /// Shape becomes `cols x rows`; `(r, c)` moves to `(c, r)`.
    pub fn transpose(&self) -> Self {
        Self {
            shape: self.shape.transposed(),
            entries: self
                .entries
                .iter()
                .map(|(pos, &v)| (pos.transposed(), v))
                .collect(),
        }
    }

    /// Matrix-vector product `A x`. Rows whose explicit entries only meet
    /// implicit zeros of `x` stay unstored in the result.
    pub fn mul_vec(&self, vector: &SparseVector<T>) -> SparseResult<SparseVector<T>> {
        if vector.size() != self.cols() {
            return Err(SparseError::mismatch(
                "matrix-vector product",
                self.shape,
                Shape::column(vector.size()),
            ));
        }
        let mut result = SparseVector::new(self.rows());
        for (pos, value) in self.iter() {
            if vector.contains(pos.col) {
                *result.entry_mut(pos.row) += value * vector.get(pos.col);
            }
        }
        Ok(result)
    }

    /// Matrix-matrix product `A B`.
    ///
    /// Each explicit `(r, k)` of `A` is paired with the explicit entries of
    /// row `k` of `B`; contributions to the same destination accumulate.
    pub fn matmul(&self, other: &Self) -> SparseResult<Self> {
        if self.cols() != other.rows() {
            return Err(SparseError::mismatch(
                "matrix product",
                self.shape,
                other.shape,
            ));
        }
        let mut result = Self::new(self.rows(), other.cols());
        for (pos, lhs) in self.iter() {
            for (col, rhs) in other.row_iter(pos.col) {
                *result
                    .entries
                    .entry(MatrixPos::new(pos.row, col))
                    .or_insert_with(T::zero) += lhs * rhs;
            }
        }
        Ok(result)
    }

    /// Integer power by square-and-multiply, starting from the identity.
    pub fn power_int(&self, exponent: u32) -> SparseResult<Self> {
        if !self.is_square() {
            return Err(SparseError::not_square("power_int", self.shape));
        }
        trace!(exponent, shape = %self.shape, "integer matrix power");

        let mut result = Self::identity(self.rows());
        let mut base = self.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.matmul(&base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.matmul(&base)?;
            }
        }
        Ok(result)
    }

    /// Square root of the sum of squared magnitudes of the stored entries.
    pub fn frobenius_norm(&self) -> f64 {
        self.entries
            .values()
            .map(|v| v.magnitude().powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Compare against `other` with an absolute tolerance on every position.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.shape == other.shape
            && self
                .union_positions(other)
                .all(|pos| (self.value_at(pos) - other.value_at(pos)).magnitude() <= tol)
    }

    fn value_at(&self, pos: MatrixPos) -> T {
        self.entries.get(&pos).copied().unwrap_or_else(T::zero)
    }

    fn union_positions<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = MatrixPos> + 'a {
        self.entries.keys().copied().chain(
            other
                .entries
                .keys()
                .copied()
                .filter(move |pos| !self.entries.contains_key(pos)),
        )
    }

    fn checked_pos(&self, row: usize, col: usize) -> MatrixPos {
        let pos = MatrixPos::new(row, col);
        assert!(
            self.shape.contains(pos),
            "position {} out of bounds for {} sparse matrix",
            pos,
            self.shape
        );
        pos
    }

    fn check_same_shape(&self, op: &'static str, other: &Self) -> SparseResult<()> {
        if self.shape != other.shape {
            return Err(SparseError::mismatch(op, self.shape, other.shape));
        }
        Ok(())
    }
}

/// Value equality over the union of explicit and implicit-zero positions.
/// Matrices of different shapes are never equal.
impl<T: Scalar> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self
                .union_positions(other)
                .all(|pos| self.value_at(pos) == other.value_at(pos))
    }
}

impl<T: Scalar> Mul<T> for SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(mut self, scalar: T) -> Self::Output {
        self.apply(|v| v * scalar);
        self
    }
}

impl<T: Scalar> Mul<T> for &SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: Scalar> Neg for SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn neg(mut self) -> Self::Output {
        self.apply(|v| -v);
        self
    }
}
