//! Input validation for tensors and analysis data.
//!
//! ## Purpose
//!
//! This module provides the checks shared by every constructor in the crate:
//! element counts for tensor input, finiteness of values, the minimum number
//! of data points for an analysis, and confidence-level bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reshape, sort or correct input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DtiError;
use crate::primitives::vector::Vector3;

/// Minimum number of data points accepted by `ScalarAnalysis` and `VectorAnalysis`.
pub const MIN_DATA_POINTS: usize = 2;

/// Validation utility for tensor input and analysis data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Tensor Input Validation
    // ========================================================================

    /// Validate that a flat input has exactly `expected` elements.
    pub fn validate_shape(got: usize, expected: usize) -> Result<(), DtiError> {
        if got != expected {
            return Err(DtiError::InvalidShape { got, expected });
        }
        Ok(())
    }

    /// Validate that every element is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), DtiError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(DtiError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Analysis Data Validation
    // ========================================================================

    /// Validate that a data set holds at least `min` points.
    pub fn validate_min_points(got: usize, min: usize) -> Result<(), DtiError> {
        if got < min {
            return Err(DtiError::TooFewDataPoints { got, min });
        }
        Ok(())
    }

    /// Validate scalar data for analysis.
    pub fn validate_scalars<T: Float>(data: &[T]) -> Result<(), DtiError> {
        Self::validate_min_points(data.len(), MIN_DATA_POINTS)?;
        Self::validate_finite(data, "data")
    }

    /// Validate vector data for analysis.
    pub fn validate_vectors<T: Float>(data: &[Vector3<T>]) -> Result<(), DtiError> {
        Self::validate_min_points(data.len(), MIN_DATA_POINTS)?;
        for (i, v) in data.iter().enumerate() {
            if !v.is_finite() {
                return Err(DtiError::InvalidNumericValue(format!(
                    "data[{}]=({}, {}, {})",
                    i,
                    v.x().to_f64().unwrap_or(f64::NAN),
                    v.y().to_f64().unwrap_or(f64::NAN),
                    v.z().to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a confidence level, which must lie in the open interval (0, 1).
    pub fn validate_confidence<T: Float>(ci: T) -> Result<(), DtiError> {
        if !ci.is_finite() || ci <= T::zero() || ci >= T::one() {
            return Err(DtiError::InvalidConfidence(
                ci.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}
