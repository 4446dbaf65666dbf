//! Error types for tensor construction and statistical analysis.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate.
//!
//! ## Design notes
//!
//! * **no_std friendly**: `Display` is implemented by hand; `std::error::Error`
//!   is only implemented when the `std` feature is enabled.
//! * **Construction-time**: Errors are raised where an invariant is first
//!   violated, which is nearly always a constructor.
//!
//! ## Non-goals
//!
//! * Numerically undefined metrics (FA of a null tensor, mode of an isotropic
//!   tensor) are not errors; they evaluate to NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Errors raised by tensor construction and data analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum DtiError {
    /// Flat input cannot be arranged into a 3x3 tensor.
    InvalidShape {
        /// Number of elements supplied.
        got: usize,
        /// Number of elements required.
        expected: usize,
    },

    /// An analysis was constructed with fewer data points than it needs.
    TooFewDataPoints {
        /// Number of data points supplied.
        got: usize,
        /// Minimum number of data points required.
        min: usize,
    },

    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Confidence level outside the open interval (0, 1).
    InvalidConfidence(f64),

    /// The eigensolver produced an eigenvalue with a non-negligible imaginary part.
    ///
    /// Non-negligible means above `IMAGINARY_TOLERANCE` times the largest
    /// absolute tensor element; only non-symmetric input can trigger this.
    ComplexEigenvalues {
        /// Largest absolute imaginary part encountered.
        imaginary: f64,
    },

    /// The eigensolver could not produce eigenvectors.
    DecompositionFailed,
}

impl fmt::Display for DtiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DtiError::InvalidShape { got, expected } => write!(
                f,
                "Invalid shape: got {} elements, cannot form a 3x3 tensor (expected {})",
                got, expected
            ),
            DtiError::TooFewDataPoints { got, min } => {
                write!(f, "Too few data points provided: {} ({} required)", got, min)
            }
            DtiError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            DtiError::InvalidConfidence(ci) => {
                write!(f, "Invalid confidence level: {} (must be > 0 and < 1)", ci)
            }
            DtiError::ComplexEigenvalues { imaginary } => write!(
                f,
                "Complex eigenvalues are not supported: imaginary part {}",
                imaginary
            ),
            DtiError::DecompositionFailed => write!(f, "Eigendecomposition failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DtiError {}
