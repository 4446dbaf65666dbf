//! 3x3 tensor with a cached, sorted eigendecomposition.
//!
//! ## Purpose
//!
//! `Tensor3` stores nine elements in row-major order together with the
//! eigendecomposition of the matrix they form.
//!
//! ## Design notes
//!
//! * **Eager memoisation**: The decomposition is computed exactly once, in the
//!   constructor, and stored alongside the elements. Tensors are immutable, so
//!   the cached result never needs invalidation and shared references are safe
//!   across threads.
//! * **General solver**: Symmetry is expected but not assumed.
//!
//! ## Invariants
//!
//! * Exactly nine finite elements, addressable as row-major 3x3.
//! * `eigen_values()` is sorted descending by raw value (a large negative
//!   eigenvalue sorts last) and `eigen_vectors()[i]` belongs to
//!   `eigen_values()[i]`.
//!
//! ## Non-goals
//!
//! * Tensor estimation from diffusion-weighted signal.
//! * Matrices with complex eigenvalues.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::DtiError;
use crate::primitives::validator::Validator;
use crate::primitives::vector::Vector3;

/// Number of elements in a full 3x3 tensor.
pub const FULL_LEN: usize = 9;

/// Number of independent elements in a symmetric 3x3 tensor.
pub const SYMMETRIC_LEN: usize = 6;

// ============================================================================
// Eigendecomposition Result
// ============================================================================

/// Eigenvalues in descending order, paired index-wise with their eigenvectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigen<T> {
    values: [T; 3],
    vectors: [Vector3<T>; 3],
}

impl<T: Float> Eigen<T> {
    /// Eigenvalues `[L1, L2, L3]` with `L1 >= L2 >= L3`.
    #[inline]
    pub fn values(&self) -> [T; 3] {
        self.values
    }

    /// Unit eigenvectors `[E1, E2, E3]`, `Ei` belonging to `Li`.
    #[inline]
    pub fn vectors(&self) -> [Vector3<T>; 3] {
        self.vectors
    }

    /// Rebuild the matrix as `V · diag(L) · V⁻¹`, with eigenvectors as the columns of `V`.
    ///
    /// Returns `None` when the eigenvector matrix is singular.
    pub fn reconstruct(&self) -> Option<[[T; 3]; 3]> {
        // V[r][c] is component r of eigenvector c.
        let v: [[T; 3]; 3] = core::array::from_fn(|r| {
            core::array::from_fn(|c| self.vectors[c].to_array()[r])
        });
        let v_inv = invert3(&v)?;

        Some(core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                (0..3).fold(T::zero(), |acc, k| acc + v[r][k] * self.values[k] * v_inv[k][c])
            })
        }))
    }
}

/// Inverse of a 3x3 matrix via the adjugate.
fn invert3<T: Float>(m: &[[T; 3]; 3]) -> Option<[[T; 3]; 3]> {
    let cof = |r0: usize, r1: usize, c0: usize, c1: usize| {
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    };
    // Transposed cofactor matrix.
    let adj = [
        [cof(1, 2, 1, 2), -cof(0, 2, 1, 2), cof(0, 1, 1, 2)],
        [-cof(1, 2, 0, 2), cof(0, 2, 0, 2), -cof(0, 1, 0, 2)],
        [cof(1, 2, 0, 1), -cof(0, 2, 0, 1), cof(0, 1, 0, 1)],
    ];
    let det = m[0][0] * adj[0][0] + m[0][1] * adj[1][0] + m[0][2] * adj[2][0];
    if det == T::zero() || !det.is_finite() {
        return None;
    }
    Some(adj.map(|row| row.map(|a| a / det)))
}

// ============================================================================
// Tensor3
// ============================================================================

/// A 3x3 tensor with its eigendecomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor3<T> {
    rows: [[T; 3]; 3],
    eigen: Eigen<T>,
}

impl<T: FloatLinalg> Tensor3<T> {
    /// Build a tensor from its rows.
    ///
    /// Fails with `InvalidNumericValue` for NaN or infinite elements, and with
    /// `ComplexEigenvalues` when a non-symmetric input has a complex spectrum,
    /// i.e. an eigenvalue whose imaginary part exceeds
    /// `IMAGINARY_TOLERANCE · max|Aij|`. Symmetric input always has a real
    /// spectrum.
    pub fn from_rows(rows: [[T; 3]; 3]) -> Result<Self, DtiError> {
        Validator::validate_finite(rows.as_flattened(), "tensor")?;

        let (values, vectors) = T::eigen3(&rows)?;
        let eigen = Eigen {
            values,
            vectors: vectors.map(Vector3::from),
        };

        log::debug!(
            "eigendecomposition: values=[{:e}, {:e}, {:e}]",
            values[0].to_f64().unwrap_or(f64::NAN),
            values[1].to_f64().unwrap_or(f64::NAN),
            values[2].to_f64().unwrap_or(f64::NAN)
        );

        Ok(Self { rows, eigen })
    }

    /// Build a tensor from a flat sequence.
    ///
    /// * 9 elements: row-major `[Dxx, Dxy, Dxz, Dyx, Dyy, Dyz, Dzx, Dzy, Dzz]`.
    /// * 6 elements: upper triangle `[Dxx, Dxy, Dxz, Dyy, Dyz, Dzz]`, mirrored
    ///   into a symmetric tensor (see [`Tensor3::from_upper_triangle`]).
    ///
    /// Any other length is a shape error.
    pub fn from_slice(data: &[T]) -> Result<Self, DtiError> {
        if data.len() == SYMMETRIC_LEN {
            return Self::from_upper_triangle([
                data[0], data[1], data[2], data[3], data[4], data[5],
            ]);
        }

        Validator::validate_shape(data.len(), FULL_LEN)?;
        Self::from_rows([
            [data[0], data[1], data[2]],
            [data[3], data[4], data[5]],
            [data[6], data[7], data[8]],
        ])
    }

    /// Build a symmetric tensor from `[Dxx, Dxy, Dxz, Dyy, Dyz, Dzz]`.
    pub fn from_upper_triangle(d: [T; 6]) -> Result<Self, DtiError> {
        let [xx, xy, xz, yy, yz, zz] = d;
        Self::from_rows([[xx, xy, xz], [xy, yy, yz], [xz, yz, zz]])
    }

    /// Element-wise mean of a set of row-major tensors.
    pub(crate) fn mean_of(tensors: impl IntoIterator<Item = [[T; 3]; 3]>) -> Result<Self, DtiError> {
        let mut sum = [[T::zero(); 3]; 3];
        let mut n = 0usize;
        for t in tensors {
            for (acc_row, row) in sum.iter_mut().zip(t.iter()) {
                for (acc, &v) in acc_row.iter_mut().zip(row.iter()) {
                    *acc = *acc + v;
                }
            }
            n += 1;
        }
        Validator::validate_min_points(n, 1)?;
        let n = T::from(n).unwrap();
        Self::from_rows(sum.map(|row| row.map(|v| v / n)))
    }

    /// Rows of the tensor.
    #[inline]
    pub fn rows(&self) -> [[T; 3]; 3] {
        self.rows
    }

    /// Elements in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.rows.as_flattened().to_vec()
    }

    /// Element at `(row, col)`. Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows[row][col]
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> T {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    /// Whether every off-diagonal pair differs by at most `tol`.
    pub fn is_symmetric(&self, tol: T) -> bool {
        let r = &self.rows;
        (r[0][1] - r[1][0]).abs() <= tol
            && (r[0][2] - r[2][0]).abs() <= tol
            && (r[1][2] - r[2][1]).abs() <= tol
    }

    /// The cached eigendecomposition.
    #[inline]
    pub fn eigen(&self) -> &Eigen<T> {
        &self.eigen
    }

    /// Eigenvalues `[L1, L2, L3]`, descending.
    #[inline]
    pub fn eigen_values(&self) -> [T; 3] {
        self.eigen.values
    }

    /// Eigenvectors `[E1, E2, E3]`, matching `eigen_values()` by index.
    #[inline]
    pub fn eigen_vectors(&self) -> [Vector3<T>; 3] {
        self.eigen.vectors
    }
}

impl<T: FloatLinalg> TryFrom<[[T; 3]; 3]> for Tensor3<T> {
    type Error = DtiError;

    fn try_from(rows: [[T; 3]; 3]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T: FloatLinalg> TryFrom<&[T]> for Tensor3<T> {
    type Error = DtiError;

    fn try_from(data: &[T]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}
