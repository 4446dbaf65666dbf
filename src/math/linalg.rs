//! Linear algebra backend for 3x3 eigendecomposition.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` types to an nalgebra-based eigensolver
//! for 3x3 real matrices. The solver does not assume symmetry.
//!
//! ## Design notes
//!
//! * Eigenvalues come from the real Schur decomposition (nalgebra
//!   `complex_eigenvalues`), so non-symmetric input is handled.
//! * Eigenvectors are the null space of `A - λI`, taken from the right
//!   singular vectors with the smallest singular values. Eigenvalues that agree
//!   within `CLUSTER_TOLERANCE` share one SVD, so repeated eigenvalues of a
//!   symmetric tensor get an orthonormal set of vectors instead of copies.
//! * Only singular vectors within `NULL_SPACE_TOLERANCE` are eigenvectors. For
//!   a defective matrix the null space is smaller than the multiplicity, and
//!   the eigenvectors found are repeated to fill the cluster.
//! * `f32` input is promoted to `f64` for the solve.
//!
//! ## Invariants
//!
//! * Eigenvalues are returned in descending numeric order.
//! * `vectors[i]` is the unit eigenvector of `values[i]`, with its
//!   largest-magnitude component positive.
//!
//! ## Non-goals
//!
//! * General n x n matrices.
//! * Complex spectra: eigenvalues with a non-negligible imaginary part are rejected.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DtiError;

/// Imaginary parts up to this fraction of the largest absolute element are discarded.
pub const IMAGINARY_TOLERANCE: f64 = 1e-9;

/// Eigenvalues closer than this fraction of the largest absolute element share a null space.
pub const CLUSTER_TOLERANCE: f64 = 1e-9;

/// Singular values up to this fraction of the largest absolute element span the null space.
pub const NULL_SPACE_TOLERANCE: f64 = 1e-8;

/// Sorted eigenvalues paired with their eigenvectors.
pub type EigenPairs<T> = ([T; 3], [[T; 3]; 3]);

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Eigendecomposition of a row-major 3x3 matrix.
    ///
    /// Returns eigenvalues in descending order and, at the same index, the
    /// corresponding unit eigenvector.
    fn eigen3(rows: &[[Self; 3]; 3]) -> Result<EigenPairs<Self>, DtiError>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn eigen3(rows: &[[Self; 3]; 3]) -> Result<EigenPairs<Self>, DtiError> {
        nalgebra_backend::eigen3_f64(rows)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn eigen3(rows: &[[Self; 3]; 3]) -> Result<EigenPairs<Self>, DtiError> {
        nalgebra_backend::eigen3_f32(rows)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based eigendecomposition.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::Matrix3;

    /// Eigendecomposition of a 3x3 matrix using f64 precision.
    pub fn eigen3_f64(rows: &[[f64; 3]; 3]) -> Result<EigenPairs<f64>, DtiError> {
        let matrix = Matrix3::from_fn(|r, c| rows[r][c]);
        let scale = matrix.amax();

        // Null tensor: every vector is an eigenvector of 0.
        if scale == 0.0 {
            return Ok((
                [0.0; 3],
                [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            ));
        }

        let values = real_eigenvalues(&matrix, scale)?;
        let vectors = eigenvectors(&matrix, &values, scale)?;
        Ok((values, vectors))
    }

    /// Eigendecomposition of a 3x3 matrix using f32 input, solved in f64.
    pub fn eigen3_f32(rows: &[[f32; 3]; 3]) -> Result<EigenPairs<f32>, DtiError> {
        let promoted = rows.map(|row| row.map(f64::from));
        let (values, vectors) = eigen3_f64(&promoted)?;
        Ok((
            values.map(|v| v as f32),
            vectors.map(|vec| vec.map(|v| v as f32)),
        ))
    }

    /// Eigenvalues sorted in descending order, with negligible imaginary parts dropped.
    fn real_eigenvalues(matrix: &Matrix3<f64>, scale: f64) -> Result<[f64; 3], DtiError> {
        let spectrum = matrix.complex_eigenvalues();

        let imaginary = spectrum.iter().fold(0.0_f64, |acc, c| acc.max(c.im.abs()));
        if imaginary > IMAGINARY_TOLERANCE * scale {
            return Err(DtiError::ComplexEigenvalues { imaginary });
        }
        if imaginary > 0.0 {
            log::warn!(
                "discarding negligible imaginary eigenvalue parts (max {:e})",
                imaginary
            );
        }

        let mut values = [spectrum[0].re, spectrum[1].re, spectrum[2].re];
        // Stable descending sort on the raw value, not the magnitude.
        values.sort_by(|a, b| b.total_cmp(a));
        Ok(values)
    }

    /// Unit eigenvectors for already-sorted eigenvalues.
    fn eigenvectors(
        matrix: &Matrix3<f64>,
        values: &[f64; 3],
        scale: f64,
    ) -> Result<[[f64; 3]; 3], DtiError> {
        let tol = CLUSTER_TOLERANCE * scale;
        let mut vectors = [[0.0; 3]; 3];

        let mut start = 0;
        while start < 3 {
            let mut end = start + 1;
            while end < 3 && (values[start] - values[end]).abs() <= tol {
                end += 1;
            }
            let cluster = &values[start..end];
            let shift = cluster.iter().sum::<f64>() / cluster.len() as f64;

            let shifted = matrix - Matrix3::identity() * shift;

            // A = λI: every direction is an eigenvector.
            if shifted.amax() <= tol {
                for (k, slot) in vectors[start..end].iter_mut().enumerate() {
                    slot[k] = 1.0;
                }
                start = end;
                continue;
            }

            let svd = shifted.svd(false, true);
            let v_t = svd.v_t.ok_or(DtiError::DecompositionFailed)?;

            // Null space first: right singular vectors by ascending singular value.
            let mut order = [0usize, 1, 2];
            order.sort_by(|&i, &j| svd.singular_values[i].total_cmp(&svd.singular_values[j]));

            // The smallest singular vector is always the best eigenvector estimate.
            let null_tol = NULL_SPACE_TOLERANCE * scale;
            let nullity = 1 + order[1..]
                .iter()
                .take_while(|&&i| svd.singular_values[i] <= null_tol)
                .count();
            if nullity < end - start {
                log::debug!(
                    "defective eigenvalue {:e}: multiplicity {}, null space dimension {}",
                    shift,
                    end - start,
                    nullity
                );
            }

            for (k, slot) in vectors[start..end].iter_mut().enumerate() {
                let row = order[k % nullity];
                *slot = canonical_sign([v_t[(row, 0)], v_t[(row, 1)], v_t[(row, 2)]])?;
            }

            start = end;
        }

        Ok(vectors)
    }

    /// Normalise to unit length and flip so the largest-magnitude component is positive.
    fn canonical_sign(v: [f64; 3]) -> Result<[f64; 3], DtiError> {
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if norm <= 0.0 || !norm.is_finite() {
            return Err(DtiError::DecompositionFailed);
        }

        let mut dominant = 0;
        for i in 1..3 {
            if v[i].abs() > v[dominant].abs() {
                dominant = i;
            }
        }
        let sign = if v[dominant] < 0.0 { -1.0 } else { 1.0 };
        Ok(v.map(|c| sign * c / norm))
    }
}
