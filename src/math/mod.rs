//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure numerical building blocks with no tensor- or analysis-specific logic:
//! - 3x3 eigendecomposition backed by nalgebra
//! - Sample moments
//! - Order statistics and empirical confidence bounds
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Analysis
//!   ↓
//! Layer 3: Tensor
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Eigensolver bridge and nalgebra backend.
pub mod linalg;

/// Mean, variance and central moments.
pub mod moments;

/// Median and order-statistic confidence bounds.
pub mod order_stats;
