//! Matrix logarithm, exponential and fractional power by truncated series.
//!
//! ```text
//! log(A) = Σ_{n=1}^{N} (-1)^{n+1} (A - I)^n / n        requires ‖A‖_F < 1
//! exp(A) = I + Σ_{k=1}^{N} A^k / k!
//! A^p    = exp(p · log(A))
//! ```
//!
//! `N` is [`SeriesConfig::order`] and is inclusive in both series. The
//! logarithm short-circuits to the zero matrix for the identity; otherwise
//! the Frobenius-norm precondition must hold, which also confines
//! [`SparseMatrix::power`] to matrices near the identity's scale.

use sparsa_core::{Scalar, SeriesConfig, SparseError, SparseResult};
use tracing::debug;

use super::matrix::SparseMatrix;

impl<T: Scalar> SparseMatrix<T> {
    /// Matrix logarithm with the default series order.
    pub fn log(&self) -> SparseResult<Self> {
        self.log_with(&SeriesConfig::default())
    }

    /// Matrix logarithm by the Mercator series in `A - I`.
    pub fn log_with(&self, config: &SeriesConfig) -> SparseResult<Self> {
        if !self.is_square() {
            return Err(SparseError::not_square("log", self.shape()));
        }
        config.validate()?;

        let n = self.rows();
        if self.is_identity() {
            return Ok(Self::new(n, n));
        }

        let norm = self.frobenius_norm();
        if norm.is_nan() || norm >= 1.0 {
            return Err(SparseError::InvalidArgument(format!(
                "log series needs Frobenius norm < 1, got {}",
                norm
            )));
        }
        debug!(order = config.order, norm, "matrix log series");

        let shifted = self.try_sub(&Self::identity(n))?;
        let mut result = Self::new(n, n);
        let mut term = shifted.clone();
        for k in 1..=config.order {
            if k > 1 {
                term = term.matmul(&shifted)?;
            }
            let contribution = term.div_scalar(counter(k)?)?;
            result = if k % 2 == 0 {
                result.try_sub(&contribution)?
            } else {
                result.try_add(&contribution)?
            };
        }
        Ok(result)
    }

    /// Matrix exponential with the default series order.
    pub fn exp(&self) -> SparseResult<Self> {
        self.exp_with(&SeriesConfig::default())
    }

    /// Matrix exponential by the Taylor series, accumulating `A^k / k!`
    /// one factor at a time.
    pub fn exp_with(&self, config: &SeriesConfig) -> SparseResult<Self> {
        if !self.is_square() {
            return Err(SparseError::not_square("exp", self.shape()));
        }
        config.validate()?;
        debug!(order = config.order, nnz = self.nnz(), "matrix exp series");

        let mut result = Self::identity(self.rows()).try_add(self)?;
        let mut term = self.clone();
        for k in 2..=config.order {
            term = term.matmul(self)?.div_scalar(counter(k)?)?;
            result = result.try_add(&term)?;
        }
        Ok(result)
    }

    /// Fractional power with the default series order.
    pub fn power(&self, exponent: f64) -> SparseResult<Self> {
        self.power_with(exponent, &SeriesConfig::default())
    }

    /// Fractional power `exp(exponent · log(A))`.
    ///
    /// Inherits the logarithm's `‖A‖_F < 1` precondition, so this is not a
    /// general matrix power; see [`SparseMatrix::power_int`] for integers.
    /// An exponent whose fractional part `T` cannot hold, such as `0.5` for
    /// an integer element type, is rejected.
    pub fn power_with(&self, exponent: f64, config: &SeriesConfig) -> SparseResult<Self> {
        if !self.is_square() {
            return Err(SparseError::not_square("power", self.shape()));
        }
        let p = T::from_f64(exponent)
            .filter(|p| {
                exponent.fract() == 0.0 || p.to_f64().is_some_and(|v| v.fract() != 0.0)
            })
            .ok_or_else(|| {
                SparseError::InvalidArgument(format!(
                    "exponent {} is not representable in the element type",
                    exponent
                ))
            })?;
        debug!(exponent, "fractional matrix power");
        self.log_with(config)?.scale(p).exp_with(config)
    }
}

fn counter<T: Scalar>(k: usize) -> SparseResult<T> {
    T::from_count(k).ok_or_else(|| {
        SparseError::InvalidArgument(format!(
            "series index {} is not representable in the element type",
            k
        ))
    })
}
