//! Fixed-length sparse vector.
//!
//! Only explicitly assigned indices are stored; every other index reads as
//! zero. Reads through [`SparseVector::get`] never touch storage, while
//! [`SparseVector::entry_mut`] materializes a zero entry before handing out
//! a mutable reference, the same way `BTreeMap::entry(..).or_insert` does.

use num_traits::Float;
use sparsa_core::{Scalar, Shape, SparseError, SparseResult};
use std::collections::BTreeMap;
use std::ops::Neg;

/// Sparse vector of logical length `size`.
#[derive(Debug, Clone)]
pub struct SparseVector<T> {
    size: usize,
    entries: BTreeMap<usize, T>,
}

impl<T: Scalar> SparseVector<T> {
    /// Create an all-zero vector with no explicit entries.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            entries: BTreeMap::new(),
        }
    }

    /// Build a vector from `(index, value)` pairs. Later duplicates overwrite
    /// earlier ones.
    pub fn from_entries<I>(size: usize, entries: I) -> SparseResult<Self>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut vector = Self::new(size);
        for (index, value) in entries {
            vector.try_set(index, value)?;
        }
        Ok(vector)
    }

    /// Logical length, fixed at construction.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of explicitly stored entries (including stored zeros).
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether `index` has a materialized entry.
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Value at `index`, zero when not materialized.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn get(&self, index: usize) -> T {
        self.check_index(index);
        self.entries.get(&index).copied().unwrap_or_else(T::zero)
    }

    /// Mutable reference to the value at `index`, inserting a zero entry
    /// first if none is stored.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn entry_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index);
        self.entries.entry(index).or_insert_with(T::zero)
    }

    /// Assign `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn set(&mut self, index: usize, value: T) {
        *self.entry_mut(index) = value;
    }

    /// Checked form of [`SparseVector::set`].
    pub fn try_set(&mut self, index: usize, value: T) -> SparseResult<()> {
        if index >= self.size {
            return Err(SparseError::IndexOutOfBounds {
                index,
                bound: self.size,
            });
        }
        self.entries.insert(index, value);
        Ok(())
    }

    /// Drop the stored entry at `index`, making it an implicit zero again.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.entries.remove(&index)
    }

    /// Explicit entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }

    /// Replace every stored value with `f(value)`.
    ///
    /// Implicit zeros are not visited, so `f(0)` is never applied to an
    /// index that was not materialized.
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

    /// Element-wise sum over the union of both index sets.
    pub fn try_add(&self, other: &Self) -> SparseResult<Self> {
        self.check_same_size("vector add", other)?;
        let mut result = self.clone();
        for (index, value) in other.iter() {
            match result.entries.get_mut(&index) {
                Some(existing) => *existing += value,
                None => {
                    result.entries.insert(index, value);
                }
            }
        }
        Ok(result)
    }

    /// Element-wise difference over the union of both index sets.
    pub fn try_sub(&self, other: &Self) -> SparseResult<Self> {
        self.check_same_size("vector subtract", other)?;
        let mut result = self.clone();
        result.sub_scaled(T::one(), other);
        Ok(result)
    }

    /// Multiply every stored entry by `scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = self.clone();
        result.apply(|v| v * scalar);
        result
    }

    /// Dot product, summed over the union of both index sets.
    pub fn dot(&self, other: &Self) -> SparseResult<T> {
        self.check_same_size("dot product", other)?;
        let mut sum = T::zero();
        for (index, value) in self.iter() {
            sum += value * other.get(index);
        }
        for (index, value) in other.iter() {
            if !self.contains(index) {
                sum += self.get(index) * value;
            }
        }
        Ok(sum)
    }

    /// Compare against `other` with an absolute tolerance on every position.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.size == other.size
            && self
                .union_indices(other)
                .all(|i| (self.get(i) - other.get(i)).magnitude() <= tol)
    }

    /// `self -= factor * other`, in place. Row operation used by elimination.
    pub(crate) fn sub_scaled(&mut self, factor: T, other: &Self) {
        for (index, value) in other.iter() {
            *self.entry_mut(index) -= factor * value;
        }
    }

    /// Divide every stored entry by `divisor`, in place.
    pub(crate) fn div_assign_scalar(&mut self, divisor: T) {
        for value in self.entries.values_mut() {
            *value /= divisor;
        }
    }

    fn union_indices<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = usize> + 'a {
        self.entries
            .keys()
            .copied()
            .chain(other.entries.keys().copied().filter(move |i| !self.contains(*i)))
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.size,
            "index {} out of bounds for sparse vector of size {}",
            index,
            self.size
        );
    }

    fn check_same_size(&self, op: &'static str, other: &Self) -> SparseResult<()> {
        if self.size != other.size {
            return Err(SparseError::mismatch(
                op,
                Shape::column(self.size),
                Shape::column(other.size),
            ));
        }
        Ok(())
    }
}

impl<T: Scalar + Float> SparseVector<T> {
    /// Unit vector in the direction of `self`.
    pub fn normalize(&self) -> SparseResult<Self> {
        let norm = self.dot(self)?.sqrt();
        if norm.is_zero() {
            return Err(SparseError::DivisionByZero("normalize"));
        }
        let mut result = self.clone();
        result.div_assign_scalar(norm);
        Ok(result)
    }
}

/// Value equality: same size and equal at every position, treating
/// unstored indices as zero.
impl<T: Scalar> PartialEq for SparseVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .union_indices(other)
                .all(|i| self.get(i) == other.get(i))
    }
}

impl<T: Scalar> Neg for SparseVector<T> {
    type Output = SparseVector<T>;

    fn neg(mut self) -> Self::Output {
        self.apply(|v| -v);
        self
    }
}
