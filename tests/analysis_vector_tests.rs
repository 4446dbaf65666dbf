//! Tests for `VectorAnalysis`.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Minimum data count and finiteness
//! 2. **Mean Dyadic Tensor** - Averaging of outer products
//! 3. **Angles** - Undirected angles from the mean direction
//! 4. **Coherence and Cone of Uncertainty**

use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::f64::consts::FRAC_PI_2;

use diffusion_tensor::prelude::*;
use diffusion_tensor::{dyadic_tensor, smallest_angle_from_ref};

fn unit_axes() -> Vec<Vector3<f64>> {
    vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ]
}

/// Pairs of unit vectors in the xz-plane at ±k degrees from the x-axis, k = 1..=n.
fn symmetric_fan(n: usize) -> Vec<Vector3<f64>> {
    let mut out = Vec::with_capacity(2 * n);
    for k in 1..=n {
        let theta = (k as f64).to_radians();
        out.push(Vector3::new(theta.cos(), 0.0, theta.sin()));
        out.push(Vector3::new(theta.cos(), 0.0, -theta.sin()));
    }
    out
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_too_few_data_points() {
    assert_eq!(
        VectorAnalysis::<f64>::new(vec![]).unwrap_err(),
        DtiError::TooFewDataPoints { got: 0, min: 2 }
    );
    assert_eq!(
        VectorAnalysis::new(vec![Vector3::new(1.0, 0.0, 0.0)]).unwrap_err(),
        DtiError::TooFewDataPoints { got: 1, min: 2 }
    );
}

#[test]
fn test_non_finite_vectors_rejected() {
    let result = VectorAnalysis::new(vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, f64::INFINITY, 0.0),
    ]);
    assert!(matches!(result, Err(DtiError::InvalidNumericValue(_))));
}

// ============================================================================
// Mean Dyadic Tensor Tests
// ============================================================================

#[test]
fn test_mean_dyadic_tensor_of_axes() {
    let analysis = VectorAnalysis::new(unit_axes()).unwrap();
    let rows = analysis.mean_dyadic_tensor().rows();
    for (r, row) in rows.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            let expected = if r == c { 1.0 / 3.0 } else { 0.0 };
            assert_relative_eq!(v, expected, epsilon = 1e-15);
        }
    }
    assert_eq!(analysis.len(), 3);
    assert_eq!(analysis.data(), unit_axes().as_slice());
}

#[test]
fn test_mean_dyadic_tensor_ignores_sign() {
    let a = VectorAnalysis::new(vec![
        Vector3::new(0.6, 0.8, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ])
    .unwrap();
    let b = VectorAnalysis::new(vec![
        Vector3::new(-0.6, -0.8, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
    ])
    .unwrap();
    assert_eq!(a.mean_dyadic_tensor().rows(), b.mean_dyadic_tensor().rows());
    assert!(a.mean_dyadic_tensor().is_symmetric(0.0));
}

#[test]
fn test_dyadic_tensor() {
    let t = dyadic_tensor(&Vector3::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(
        t.rows(),
        [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [3.0, 6.0, 9.0]]
    );
    // Rank one: the only non-zero eigenvalue is |v|².
    assert_relative_eq!(t.eigen_values()[0], 14.0, epsilon = 1e-10);
}

// ============================================================================
// Angle Tests
// ============================================================================

#[test]
fn test_angles_parallel_and_antiparallel_are_zero() {
    let analysis = VectorAnalysis::new(vec![
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(0.0, 0.0, 1.0),
    ])
    .unwrap();
    assert_abs_diff_eq!(analysis.mean_direction().z(), 1.0, epsilon = 1e-12);
    for angle in analysis.angles_from_mean() {
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-7);
    }
}

#[test]
fn test_angles_from_mean_of_fan() {
    let analysis = VectorAnalysis::new(symmetric_fan(10)).unwrap();
    assert_abs_diff_eq!(analysis.mean_direction().x(), 1.0, epsilon = 1e-12);

    let angles = analysis.angles_from_mean();
    for (i, angle) in angles.iter().enumerate() {
        let expected = ((i / 2 + 1) as f64).to_radians();
        assert_relative_eq!(*angle, expected, epsilon = 1e-8);
    }

    let stats = analysis.angle_analysis().unwrap();
    assert_relative_eq!(stats.max(), 10.0_f64.to_radians(), epsilon = 1e-8);
    assert_relative_eq!(stats.min(), 1.0_f64.to_radians(), epsilon = 1e-8);
}

#[test]
fn test_smallest_angle_from_ref() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    assert_abs_diff_eq!(smallest_angle_from_ref(&Vector3::new(0.0, 1.0, 0.0), &x), FRAC_PI_2);
    assert_abs_diff_eq!(smallest_angle_from_ref(&Vector3::new(-1.0, 0.0, 0.0), &x), 0.0);
    let diagonal = 0.5_f64.sqrt();
    assert_relative_eq!(
        smallest_angle_from_ref(&Vector3::new(-diagonal, diagonal, 0.0), &x),
        FRAC_PI_2 / 2.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_smallest_angle_uses_raw_dot_product() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    // The dot product is the cosine: a half-length vector reads as 60 degrees.
    assert_relative_eq!(
        smallest_angle_from_ref(&Vector3::new(0.5, 0.0, 0.0), &x),
        0.5_f64.acos(),
        epsilon = 1e-15
    );
    assert_relative_eq!(
        smallest_angle_from_ref(&Vector3::new(-0.5, 0.0, 0.0), &x),
        0.5_f64.acos(),
        epsilon = 1e-15
    );
    // |dot| above 1 is clamped to 1.
    assert_eq!(smallest_angle_from_ref(&Vector3::new(2.0, 0.0, 0.0), &x), 0.0);
    // Zero vector: cosine 0.
    assert_abs_diff_eq!(smallest_angle_from_ref(&Vector3::new(0.0, 0.0, 0.0), &x), FRAC_PI_2);
}

#[test]
fn test_angles_from_mean_use_raw_dot_product() {
    let analysis = VectorAnalysis::new(vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.5, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
    ])
    .unwrap();
    let angles = analysis.angles_from_mean();
    assert_abs_diff_eq!(angles[0], 0.0, epsilon = 1e-7);
    assert_relative_eq!(angles[1], 0.5_f64.acos(), epsilon = 1e-10);
    assert_abs_diff_eq!(angles[2], 0.0, epsilon = 1e-7);
}

// ============================================================================
// Coherence Tests
// ============================================================================

#[test]
fn test_coherence_of_identical_directions_is_one() {
    let analysis = VectorAnalysis::new(vec![
        Vector3::new(0.6, 0.8, 0.0),
        Vector3::new(-0.6, -0.8, 0.0),
        Vector3::new(0.6, 0.8, 0.0),
    ])
    .unwrap();
    assert_relative_eq!(analysis.coherence(), 1.0, epsilon = 1e-7);
}

#[test]
fn test_coherence_of_orthogonal_axes_is_zero() {
    let analysis = VectorAnalysis::new(unit_axes()).unwrap();
    assert_abs_diff_eq!(analysis.coherence(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_coherence_between_extremes() {
    let analysis = VectorAnalysis::new(vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ])
    .unwrap();
    // Eigenvalues 2/3, 1/3, 0.
    assert_relative_eq!(analysis.coherence(), 0.5, epsilon = 1e-12);
}

#[test]
fn test_coherence_of_zero_vectors_is_nan() {
    let analysis = VectorAnalysis::new(vec![Vector3::new(0.0_f64, 0.0, 0.0); 3]).unwrap();
    assert!(analysis.coherence().is_nan());
}

// ============================================================================
// Cone of Uncertainty Tests
// ============================================================================

#[test]
fn test_cone_of_uncertainty_of_fan() {
    // 20 angles: ci·N = 19 -> the largest angle.
    let analysis = VectorAnalysis::new(symmetric_fan(10)).unwrap();
    assert_relative_eq!(
        analysis.cone_of_uncertainty(),
        10.0_f64.to_radians(),
        epsilon = 1e-8
    );

    // ci·N = 10 -> sorted index 10, the first of the 6-degree pair.
    assert_relative_eq!(
        analysis.cone_of_uncertainty_at(0.5).unwrap(),
        6.0_f64.to_radians(),
        epsilon = 1e-8
    );
}

#[test]
fn test_cone_of_uncertainty_invalid_confidence() {
    let analysis = VectorAnalysis::new(symmetric_fan(3)).unwrap();
    assert_eq!(
        analysis.cone_of_uncertainty_at(1.0),
        Err(DtiError::InvalidConfidence(1.0))
    );
}

#[test]
fn test_cone_of_uncertainty_collinear_is_zero() {
    let analysis = VectorAnalysis::new(vec![Vector3::new(0.0, 1.0, 0.0); 5]).unwrap();
    assert_abs_diff_eq!(analysis.cone_of_uncertainty(), 0.0, epsilon = 1e-7);
}
