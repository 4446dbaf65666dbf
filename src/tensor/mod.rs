//! Layer 3: Tensor
//!
//! # Purpose
//!
//! Tensor types built on the eigensolver:
//! - `Tensor3`, a 3x3 tensor with a cached, sorted eigendecomposition
//! - `DiffusionTensor`, the diffusion MRI metrics derived from it
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Analysis
//!   ↓
//! Layer 3: Tensor ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// 3x3 tensor and its eigendecomposition.
pub mod tensor3;

/// Diffusion tensor metrics.
pub mod diffusion;
