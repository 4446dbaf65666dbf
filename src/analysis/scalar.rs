//! Descriptive statistics over a list of scalars.
//!
//! ## Purpose
//!
//! `ScalarAnalysis` holds a validated data set and derives location, spread
//! and interval statistics from it on demand.
//!
//! ## Design notes
//!
//! * **Validated once**: At least two finite points are required; the check
//!   runs in the constructor so every accessor is infallible except those
//!   taking a confidence level.
//! * **Not cached**: Statistics are recomputed on every call.
//!
//! ## Key concepts
//!
//! * **Empirical intervals**: Confidence bounds are order statistics of the
//!   sorted data (see `math::order_stats`), not parametric intervals.
//! * **Bessel's correction**: `stdev` and `variance` are sample statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{mean, sample_stdev, sample_variance};
use crate::math::order_stats::{ci_1sided_index, ci_2sided_indices, median, sorted};
use crate::primitives::errors::DtiError;
use crate::primitives::validator::Validator;

/// Confidence level of the fixed 95% intervals.
pub const CI95: f64 = 0.95;

/// Descriptive statistics over at least two scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarAnalysis<T> {
    data: Vec<T>,
}

impl<T: Float> ScalarAnalysis<T> {
    /// Validate and wrap the data.
    ///
    /// Fails with `TooFewDataPoints` for fewer than two points and with
    /// `InvalidNumericValue` for NaN or infinite values.
    pub fn new(data: Vec<T>) -> Result<Self, DtiError> {
        Validator::validate_scalars(&data)?;
        log::trace!("scalar analysis over {} points", data.len());
        Ok(Self { data })
    }

    /// Number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction requires at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The data in input order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The data sorted ascending.
    pub fn sorted(&self) -> Vec<T> {
        sorted(&self.data)
    }

    /// Minimum.
    pub fn min(&self) -> T {
        self.data.iter().copied().fold(T::infinity(), T::min)
    }

    /// Maximum.
    pub fn max(&self) -> T {
        self.data.iter().copied().fold(T::neg_infinity(), T::max)
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> T {
        mean(&self.data)
    }

    /// Median; the mean of the two middle values for even counts.
    pub fn median(&self) -> T {
        median(&self.data)
    }

    /// Sample standard deviation.
    pub fn stdev(&self) -> T {
        sample_stdev(&self.data)
    }

    /// Sample variance.
    pub fn variance(&self) -> T {
        sample_variance(&self.data)
    }

    // ========================================================================
    // Intervals
    // ========================================================================

    /// Mean ± one standard deviation, each bound clamped to the data range.
    pub fn interval_stdev(&self) -> (T, T) {
        let mean = self.mean();
        let stdev = self.stdev();
        (self.min().max(mean - stdev), (mean + stdev).min(self.max()))
    }

    /// Interval bounded by the extreme values.
    pub fn interval_minmax(&self) -> (T, T) {
        (self.min(), self.max())
    }

    /// Two-sided empirical confidence interval at level `ci` in (0, 1).
    pub fn interval_ci_2sided(&self, ci: T) -> Result<(T, T), DtiError> {
        Validator::validate_confidence(ci)?;
        Ok(self.ci_2sided_at(ci))
    }

    /// Two-sided 95% empirical confidence interval.
    pub fn interval_ci95_2sided(&self) -> (T, T) {
        self.ci_2sided_at(ci95())
    }

    /// Finite bound of the one-sided empirical confidence interval at level `ci`.
    pub fn bound_ci_1sided(&self, ci: T) -> Result<T, DtiError> {
        Validator::validate_confidence(ci)?;
        let x_sorted = self.sorted();
        Ok(x_sorted[ci_1sided_index(self.len(), ci)])
    }

    fn ci_2sided_at(&self, ci: T) -> (T, T) {
        let (lo, hi) = ci_2sided_indices(self.len(), ci);
        let x_sorted = self.sorted();
        (x_sorted[lo], x_sorted[hi])
    }
}

/// The 95% confidence level in `T`.
#[inline]
pub(crate) fn ci95<T: Float>() -> T {
    T::from(CI95).unwrap()
}
