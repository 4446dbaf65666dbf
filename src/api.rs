//! Public API surface.
//!
//! ## Purpose
//!
//! This module gathers the user-facing types and functions from every layer
//! so they can be re-exported from the crate root and the prelude.
//!
//! ## Key concepts
//!
//! * **Single tensor**: [`Tensor3`] / [`DiffusionTensor`] for per-sample metrics.
//! * **Populations**: [`ScalarAnalysis`] / [`VectorAnalysis`] for aggregate statistics.

// Publicly re-exported types
pub use crate::analysis::scalar::{ScalarAnalysis, CI95};
pub use crate::analysis::vector::{dyadic_tensor, smallest_angle_from_ref, VectorAnalysis};
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::order_stats::{ci_1sided, ci_2sided};
pub use crate::primitives::errors::DtiError;
pub use crate::primitives::validator::MIN_DATA_POINTS;
pub use crate::primitives::vector::Vector3;
pub use crate::tensor::diffusion::DiffusionTensor;
pub use crate::tensor::tensor3::{Eigen, Tensor3};
