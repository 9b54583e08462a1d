//! Numeric element bound for sparse vectors and matrices.
//!
//! Sparse algebra needs the four field operations, equality against zero,
//! and an absolute value with ordering for partial pivoting. Series methods
//! additionally divide by integer counters (`A^n / n`), which is what the
//! `FromPrimitive` bound is for. Anything satisfying these bounds gets
//! [`Scalar`] through the blanket impl below.
//!
//! ```
//! use sparsa_core::Scalar;
//!
//! fn sum_sq<T: Scalar>(xs: &[T]) -> f64 {
//!     xs.iter().map(|x| x.magnitude().powi(2)).sum()
//! }
//!
//! assert_eq!(sum_sq(&[3.0_f64, -4.0]), 25.0);
//! assert_eq!(sum_sq(&[3_i64, -4]), 25.0);
//! ```

use num_traits::{FromPrimitive, Num, NumAssign, Signed, ToPrimitive};
use std::fmt::{Debug, Display};

/// Element type usable in `SparseVector` and `SparseMatrix`.
pub trait Scalar:
    Copy + Debug + Display + PartialOrd + Num + NumAssign + Signed + ToPrimitive + FromPrimitive
{
    /// Absolute value as `f64`, used for norms and tolerance checks.
    ///
    /// Values with no `f64` representation map to `NaN`, which fails every
    /// `<` comparison downstream.
    #[inline]
    fn magnitude(self) -> f64 {
        self.abs().to_f64().unwrap_or(f64::NAN)
    }

    /// Lossy conversion of a loop counter into the element type.
    #[inline]
    fn from_count(n: usize) -> Option<Self> {
        Self::from_usize(n)
    }
}

impl<T> Scalar for T where
    T: Copy
        + Debug
        + Display
        + PartialOrd
        + Num
        + NumAssign
        + Signed
        + ToPrimitive
        + FromPrimitive
{
}
