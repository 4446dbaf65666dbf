//! Directional statistics over a list of 3-vectors.
//!
//! ## Purpose
//!
//! `VectorAnalysis` summarises a set of directions (typically principal
//! eigenvectors from many samples) through their mean dyadic tensor.
//!
//! ## Design notes
//!
//! * **Dyadic averaging**: Each vector contributes `v · vᵗ`, so `v` and `-v`
//!   contribute identically. The primary eigenvector of the average is the
//!   mean direction.
//! * **Computed once**: The mean dyadic tensor, and with it the
//!   eigendecomposition, is built in the constructor.
//!
//! ## Key concepts
//!
//! * **Angles**: `acos(|E1 · v|)` between each (unit) vector and the mean
//!   direction E1, in radians within [0, π/2].
//! * **Coherence**: `1 - sqrt((L2 + L3) / (2 · L1))` of the mean dyadic tensor.
//! * **Cone of uncertainty**: One-sided 95% empirical bound on the angles.
//!
//! ## Non-goals
//!
//! * Weighted averaging of directions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::analysis::scalar::{ci95, ScalarAnalysis};
use crate::math::linalg::FloatLinalg;
use crate::math::order_stats::ci_1sided;
use crate::primitives::errors::DtiError;
use crate::primitives::validator::Validator;
use crate::primitives::vector::Vector3;
use crate::tensor::tensor3::Tensor3;

/// Directional statistics over at least two vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorAnalysis<T> {
    data: Vec<Vector3<T>>,
    mean_dyadic: Tensor3<T>,
}

impl<T: FloatLinalg> VectorAnalysis<T> {
    /// Validate the data and build its mean dyadic tensor.
    ///
    /// Fails with `TooFewDataPoints` for fewer than two vectors and with
    /// `InvalidNumericValue` for non-finite components.
    pub fn new(data: Vec<Vector3<T>>) -> Result<Self, DtiError> {
        Validator::validate_vectors(&data)?;
        let mean_dyadic = Tensor3::mean_of(data.iter().map(Vector3::outer))?;
        log::trace!("vector analysis over {} directions", data.len());
        Ok(Self { data, mean_dyadic })
    }

    /// Number of vectors.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction requires at least two vectors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The vectors in input order.
    #[inline]
    pub fn data(&self) -> &[Vector3<T>] {
        &self.data
    }

    /// Element-wise average of the dyadic tensors of all vectors.
    #[inline]
    pub fn mean_dyadic_tensor(&self) -> &Tensor3<T> {
        &self.mean_dyadic
    }

    /// Primary eigenvector of the mean dyadic tensor.
    #[inline]
    pub fn mean_direction(&self) -> Vector3<T> {
        self.mean_dyadic.eigen_vectors()[0]
    }

    /// Undirected angle of every vector from the mean direction, in radians.
    pub fn angles_from_mean(&self) -> Vec<T> {
        let reference = self.mean_direction();
        self.data
            .iter()
            .map(|v| smallest_angle_from_ref(v, &reference))
            .collect()
    }

    /// Scalar statistics over `angles_from_mean`.
    ///
    /// Angles of finite vectors are always finite, so this only fails on the
    /// errors `ScalarAnalysis::new` reports.
    pub fn angle_analysis(&self) -> Result<ScalarAnalysis<T>, DtiError> {
        ScalarAnalysis::new(self.angles_from_mean())
    }

    /// Coherence of the mean dyadic tensor: 1 for identical directions,
    /// approaching 0 for isotropically spread directions.
    ///
    /// NaN when L1 <= 0 (all vectors zero). Round-off can leave L2 + L3
    /// slightly negative for collinear data; the ratio is clamped at zero so
    /// such sets report a coherence of exactly 1.
    pub fn coherence(&self) -> T {
        let [l1, l2, l3] = self.mean_dyadic.eigen_values();
        if l1 <= T::zero() {
            return T::nan();
        }
        let two = T::one() + T::one();
        let ratio = ((l2 + l3) / (two * l1)).max(T::zero());
        T::one() - ratio.sqrt()
    }

    /// One-sided 95% confidence bound on `angles_from_mean`, in radians.
    pub fn cone_of_uncertainty(&self) -> T {
        self.cone_at(ci95())
    }

    /// One-sided confidence bound on `angles_from_mean` at level `ci`, in radians.
    pub fn cone_of_uncertainty_at(&self, ci: T) -> Result<T, DtiError> {
        Validator::validate_confidence(ci)?;
        Ok(self.cone_at(ci))
    }

    fn cone_at(&self, ci: T) -> T {
        ci_1sided(&self.angles_from_mean(), ci).unwrap_or_else(T::nan)
    }
}

/// Dyadic tensor `v · vᵗ` of a vector.
pub fn dyadic_tensor<T: FloatLinalg>(v: &Vector3<T>) -> Result<Tensor3<T>, DtiError> {
    Tensor3::from_rows(v.outer())
}

/// Undirected angle `acos(|reference · v|)`, in radians within [0, π/2].
///
/// Both vectors are taken to be unit length; the dot product is used as the
/// cosine directly. Antiparallel vectors have angle 0. A `|reference · v|`
/// above 1, from round-off or non-unit input, is clamped to 1 (angle 0).
pub fn smallest_angle_from_ref<T: FloatLinalg>(v: &Vector3<T>, reference: &Vector3<T>) -> T {
    let cos = reference.dot(v).abs();
    let cos = if cos > T::one() { T::one() } else { cos };
    cos.acos()
}
