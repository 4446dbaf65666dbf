//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental value types and checks shared by every other layer:
//! - `Vector3`, the fixed-size 3-vector
//! - `DtiError`, the crate error type
//! - `Validator`, construction-time input validation
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Analysis
//!   ↓
//! Layer 3: Tensor
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Input validation.
pub mod validator;

/// Fixed-size 3-vector.
pub mod vector;
