//! Layer 4: Analysis
//!
//! # Purpose
//!
//! Population statistics:
//! - `ScalarAnalysis`, descriptive statistics and empirical intervals
//! - `VectorAnalysis`, mean direction, coherence and cone of uncertainty
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Analysis ← You are here
//!   ↓
//! Layer 3: Tensor
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Statistics over scalars.
pub mod scalar;

/// Statistics over 3-vectors.
pub mod vector;
