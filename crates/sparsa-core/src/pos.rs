//! Matrix positions and shapes.
//!
//! [`MatrixPos`] is the composite storage key for matrix entries. It derives
//! `Eq`, `Hash` and `Ord`; the ordering is row-major, so any ordered map keyed
//! by positions iterates rows top to bottom and columns left to right.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) position inside a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatrixPos {
    pub row: usize,
    pub col: usize,
}

impl MatrixPos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        MatrixPos { row, col }
    }

    /// Position mirrored across the main diagonal.
    #[inline]
    pub fn transposed(self) -> Self {
        MatrixPos {
            row: self.col,
            col: self.row,
        }
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.row == self.col
    }
}

impl From<(usize, usize)> for MatrixPos {
    fn from((row, col): (usize, usize)) -> Self {
        MatrixPos::new(row, col)
    }
}

impl fmt::Display for MatrixPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed logical shape of a matrix (or of a vector, as `n x 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Shape of a column vector of length `n`.
    #[inline]
    pub fn column(n: usize) -> Self {
        Shape { rows: n, cols: 1 }
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub fn contains(&self, pos: MatrixPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    pub fn transposed(&self) -> Self {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Total number of logical cells (explicit plus implicit), or `None`
    /// when that count does not fit in `usize`.
    pub fn len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
