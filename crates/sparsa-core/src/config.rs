//! Tuning knobs for the numerical algorithms.
//!
//! The algebra itself is parameter-free; only the truncated series and the
//! elimination pivot test take configuration. Both have defaults matching
//! the plain `log()` / `exp()` / `inverse()` calls, and the aggregate
//! [`SparsaConfig`] can be loaded from JSON with missing fields defaulted.
//!
//! ```
//! use sparsa_core::SparsaConfig;
//!
//! let cfg = SparsaConfig::from_json_str(r#"{ "series": { "order": 40 } }"#).unwrap();
//! assert_eq!(cfg.series.order, 40);
//! assert_eq!(cfg.inverse.pivot_tolerance, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SparseError, SparseResult};

/// Default truncation order for the log/exp power series.
pub const DEFAULT_SERIES_ORDER: usize = 100;

/// Truncation settings for matrix log, exp and fractional power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Highest power of the series argument that is summed (inclusive).
    pub order: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_SERIES_ORDER,
        }
    }
}

impl SeriesConfig {
    pub fn with_order(order: usize) -> Self {
        Self { order }
    }

    pub fn validate(&self) -> SparseResult<()> {
        if self.order == 0 {
            return Err(SparseError::InvalidArgument(
                "series order must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Pivot handling for Gauss-Jordan inversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InverseConfig {
    /// Pivots with magnitude at or below this value count as zero.
    /// `0.0` means exact-zero comparison.
    pub pivot_tolerance: f64,
}

impl Default for InverseConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: 0.0,
        }
    }
}

impl InverseConfig {
    pub fn with_tolerance(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    pub fn validate(&self) -> SparseResult<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(SparseError::Config(format!(
                "pivot_tolerance must be finite and non-negative, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }

    /// Whether a pivot of the given magnitude is treated as zero.
    #[inline]
    pub fn is_zero_pivot(&self, magnitude: f64) -> bool {
        magnitude.is_nan() || magnitude <= self.pivot_tolerance
    }
}

/// Aggregate configuration for all tunable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SparsaConfig {
    pub series: SeriesConfig,
    pub inverse: InverseConfig,
}

impl SparsaConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> SparseResult<Self> {
        let config: SparsaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SparseResult<()> {
        self.series
            .validate()
            .map_err(|e| SparseError::Config(e.to_string()))?;
        self.inverse.validate()
    }
}
