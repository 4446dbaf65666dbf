//! Diffusion tensor metrics.
//!
//! ## Purpose
//!
//! `DiffusionTensor` wraps a [`Tensor3`] and exposes the standard diffusion
//! MRI quantities derived from its sorted eigendecomposition.
//!
//! ## Key concepts
//!
//! * **L1, L2, L3 / E1, E2, E3**: Eigenvalues and eigenvectors by rank.
//! * **MD**: Mean diffusivity, `(L1 + L2 + L3) / 3`.
//! * **FA**: Fractional anisotropy, `sqrt(3/2 · Σ(Li - MD)² / Σ Li²)`.
//! * **Mo**: Tensor mode, `√2 · m3 · m2^(-3/2)` with population central moments.
//!
//! ## Invariants
//!
//! * Every metric is a pure function of the cached eigenvalues.
//!
//! ## Non-goals
//!
//! * Guarding degenerate tensors: FA of a null tensor and the mode of an
//!   isotropic tensor are 0/0 and evaluate to NaN.

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::math::moments::central_moment;
use crate::primitives::errors::DtiError;
use crate::primitives::vector::Vector3;
use crate::tensor::tensor3::Tensor3;

/// A 3x3 diffusion tensor.
///
/// ```text
/// D = [[Dxx, Dxy, Dxz],
///      [Dyx, Dyy, Dyz],
///      [Dzx, Dzy, Dzz]]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionTensor<T> {
    tensor: Tensor3<T>,
}

impl<T: FloatLinalg> DiffusionTensor<T> {
    /// Wrap an existing tensor.
    #[inline]
    pub fn new(tensor: Tensor3<T>) -> Self {
        Self { tensor }
    }

    /// Build from rows. See [`Tensor3::from_rows`].
    pub fn from_rows(rows: [[T; 3]; 3]) -> Result<Self, DtiError> {
        Tensor3::from_rows(rows).map(Self::new)
    }

    /// Build from a flat sequence of 9 or 6 elements. See [`Tensor3::from_slice`].
    pub fn from_slice(data: &[T]) -> Result<Self, DtiError> {
        Tensor3::from_slice(data).map(Self::new)
    }

    /// Build a symmetric tensor from `[Dxx, Dxy, Dxz, Dyy, Dyz, Dzz]`.
    pub fn from_upper_triangle(d: [T; 6]) -> Result<Self, DtiError> {
        Tensor3::from_upper_triangle(d).map(Self::new)
    }

    /// The underlying tensor.
    #[inline]
    pub fn tensor(&self) -> &Tensor3<T> {
        &self.tensor
    }

    // ========================================================================
    // Eigenvalues and Eigenvectors
    // ========================================================================

    /// Primary eigenvalue, belonging to E1.
    #[inline]
    pub fn l1(&self) -> T {
        self.tensor.eigen_values()[0]
    }

    /// Secondary eigenvalue, belonging to E2.
    #[inline]
    pub fn l2(&self) -> T {
        self.tensor.eigen_values()[1]
    }

    /// Tertiary eigenvalue, belonging to E3.
    #[inline]
    pub fn l3(&self) -> T {
        self.tensor.eigen_values()[2]
    }

    /// Primary eigenvector (principal diffusion direction).
    #[inline]
    pub fn e1(&self) -> Vector3<T> {
        self.tensor.eigen_vectors()[0]
    }

    /// Secondary eigenvector.
    #[inline]
    pub fn e2(&self) -> Vector3<T> {
        self.tensor.eigen_vectors()[1]
    }

    /// Tertiary eigenvector.
    #[inline]
    pub fn e3(&self) -> Vector3<T> {
        self.tensor.eigen_vectors()[2]
    }

    // ========================================================================
    // Size and Shape
    // ========================================================================

    /// Mean diffusivity.
    pub fn md(&self) -> T {
        let [l1, l2, l3] = self.tensor.eigen_values();
        (l1 + l2 + l3) / T::from(3.0).unwrap()
    }

    /// Fractional anisotropy, in [0, 1] for positive semi-definite tensors.
    ///
    /// NaN for a null tensor.
    pub fn fa(&self) -> T {
        let values = self.tensor.eigen_values();
        let md = self.md();
        let numerator = values.iter().fold(T::zero(), |acc, &l| acc + (l - md) * (l - md));
        let denominator = values.iter().fold(T::zero(), |acc, &l| acc + l * l);
        (T::from(1.5).unwrap() * numerator / denominator).sqrt()
    }

    /// Tensor mode, in [-1, 1]: -1 planar, 0 orthotropic, +1 linear.
    ///
    /// NaN for an isotropic tensor.
    pub fn mode(&self) -> T {
        let values = self.tensor.eigen_values();
        let md = self.md();
        let m2 = central_moment(&values, md, 2);
        let m3 = central_moment(&values, md, 3);
        T::from(2.0).unwrap().sqrt() * m3 * m2.powf(T::from(-1.5).unwrap())
    }

    /// Axial diffusivity, equal to L1.
    #[inline]
    pub fn axial_diffusivity(&self) -> T {
        self.l1()
    }

    /// Radial diffusivity, `(L2 + L3) / 2`.
    pub fn radial_diffusivity(&self) -> T {
        (self.l2() + self.l3()) / T::from(2.0).unwrap()
    }
}

impl<T: FloatLinalg> From<Tensor3<T>> for DiffusionTensor<T> {
    fn from(tensor: Tensor3<T>) -> Self {
        Self::new(tensor)
    }
}

impl<T> AsRef<Tensor3<T>> for DiffusionTensor<T> {
    fn as_ref(&self) -> &Tensor3<T> {
        &self.tensor
    }
}
