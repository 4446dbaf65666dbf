//! # diffusion-tensor
//!
//! Derived metrics of 3x3 diffusion tensors and population statistics over
//! scalars and directions, as used in diffusion MRI.
//!
//! ## What it computes
//!
//! For a single tensor:
//! - Eigenvalues `L1 >= L2 >= L3` and matching unit eigenvectors `E1, E2, E3`
//! - Mean diffusivity (MD), fractional anisotropy (FA) and tensor mode (Mo)
//! - Axial and radial diffusivity
//!
//! For a population:
//! - Scalars: min, max, mean, median, sample standard deviation and variance,
//!   and empirical (order-statistic) confidence intervals
//! - Directions: mean dyadic tensor, mean direction, undirected angles from the
//!   mean, coherence and the cone of uncertainty
//!
//! Tensor estimation from diffusion-weighted signal is not part of this crate;
//! input tensors are assumed to be already formed.
//!
//! ## Quick start
//!
//! ```rust
//! use diffusion_tensor::prelude::*;
//!
//! let dt = DiffusionTensor::from_rows([
//!     [3.0_f64, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ])?;
//!
//! assert!((dt.l1() - 3.0).abs() < 1e-12);
//! assert!((dt.e1().x() - 1.0).abs() < 1e-12);
//! assert!((dt.md() - 5.0 / 3.0).abs() < 1e-12);
//! assert!(dt.fa() > 0.0 && dt.fa() < 1.0);
//! # Result::<(), DtiError>::Ok(())
//! ```
//!
//! Six-element input is read as the upper triangle `[Dxx, Dxy, Dxz, Dyy, Dyz, Dzz]`:
//!
//! ```rust
//! use diffusion_tensor::prelude::*;
//!
//! let dt = DiffusionTensor::from_slice(&[1.0, 0.0, 0.0, 1.0, 0.0, 1.0])?;
//! assert_eq!(dt.tensor().rows(), [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
//!
//! assert!(matches!(
//!     Tensor3::from_slice(&[1.0, 2.0, 3.0, 4.0]),
//!     Err(DtiError::InvalidShape { got: 4, expected: 9 })
//! ));
//! # Result::<(), DtiError>::Ok(())
//! ```
//!
//! ## Statistics
//!
//! ```rust
//! use diffusion_tensor::prelude::*;
//!
//! let stats = ScalarAnalysis::new((1..=100).map(f64::from).collect())?;
//! assert_eq!(stats.interval_minmax(), (1.0, 100.0));
//! assert_eq!(stats.median(), 50.5);
//!
//! let directions = VectorAnalysis::new(vec![
//!     Vector3::new(1.0_f64, 0.0, 0.0),
//!     Vector3::new(-1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//! ])?;
//! assert!((directions.mean_direction().x() - 1.0).abs() < 1e-12);
//! assert!((directions.coherence() - 0.5).abs() < 1e-12);
//! # Result::<(), DtiError>::Ok(())
//! ```
//!
//! ## Degenerate tensors
//!
//! FA of the null tensor and the mode of an isotropic tensor are 0/0; they
//! evaluate to NaN rather than an error. Coherence is NaN when every direction
//! has zero length.
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`DtiError`]. Without it the crate
//!   is `no_std` and needs `alloc`.
//! - `dev`: exposes the internal layers under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - `Vector3`, the error type and input validation.
mod primitives;

// Layer 2: Math - eigensolver backend, moments and order statistics.
mod math;

// Layer 3: Tensor - `Tensor3` with its cached eigendecomposition, and
// `DiffusionTensor` metrics (MD, FA, mode).
mod tensor;

// Layer 4: Analysis - `ScalarAnalysis` and `VectorAnalysis`.
mod analysis;

// Public API re-exports.
mod api;

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// ```
/// use diffusion_tensor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DiffusionTensor, DtiError, Eigen, ScalarAnalysis, Tensor3, Vector3, VectorAnalysis,
    };
}

// ============================================================================
// Internals
// ============================================================================

/// Internal layers, exposed for white-box testing.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and validation.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal tensor types.
    pub mod tensor {
        pub use crate::tensor::*;
    }
    /// Internal analysis types.
    pub mod analysis {
        pub use crate::analysis::*;
    }
}
