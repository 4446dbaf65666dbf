//! Tests for `ScalarAnalysis`.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Minimum data count and finiteness
//! 2. **Descriptive Statistics** - Location and spread
//! 3. **Intervals** - Min/max, stdev and empirical confidence intervals

use approx::assert_relative_eq;

use diffusion_tensor::prelude::*;
use diffusion_tensor::{ci_1sided, ci_2sided};

fn one_to(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_too_few_data_points() {
    assert_eq!(
        ScalarAnalysis::<f64>::new(vec![]),
        Err(DtiError::TooFewDataPoints { got: 0, min: 2 })
    );
    assert_eq!(
        ScalarAnalysis::new(vec![1.0]),
        Err(DtiError::TooFewDataPoints { got: 1, min: 2 })
    );
    assert!(ScalarAnalysis::new(vec![1.0, 2.0]).is_ok());
}

#[test]
fn test_non_finite_data_rejected() {
    let result = ScalarAnalysis::new(vec![1.0, f64::NAN, 3.0]);
    assert_eq!(
        result,
        Err(DtiError::InvalidNumericValue("data[1]=NaN".to_string()))
    );
}

#[test]
fn test_data_is_kept_in_input_order() {
    let stats = ScalarAnalysis::new(vec![3.0, 1.0, 2.0]).unwrap();
    assert_eq!(stats.data(), &[3.0, 1.0, 2.0]);
    assert_eq!(stats.sorted(), vec![1.0, 2.0, 3.0]);
    assert_eq!(stats.len(), 3);
    assert!(!stats.is_empty());
}

// ============================================================================
// Descriptive Statistics Tests
// ============================================================================

#[test]
fn test_location_statistics() {
    let stats = ScalarAnalysis::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_eq!(stats.min(), 2.0);
    assert_eq!(stats.max(), 9.0);
    assert_relative_eq!(stats.mean(), 5.0);
    assert_relative_eq!(stats.median(), 4.5);
}

#[test]
fn test_median_odd_length() {
    let stats = ScalarAnalysis::new(vec![5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
    assert_eq!(stats.median(), 3.0);
}

#[test]
fn test_sample_variance_and_stdev() {
    // Sum of squared deviations 32 over n - 1 = 7.
    let stats = ScalarAnalysis::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert_relative_eq!(stats.variance(), 32.0 / 7.0, epsilon = 1e-12);
    assert_relative_eq!(stats.stdev(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
}

// ============================================================================
// Interval Tests
// ============================================================================

#[test]
fn test_interval_minmax() {
    let stats = ScalarAnalysis::new(one_to(5)).unwrap();
    assert_eq!(stats.interval_minmax(), (1.0, 5.0));
}

#[test]
fn test_interval_stdev_within_range() {
    let stats = ScalarAnalysis::new(one_to(5)).unwrap();
    let (lo, hi) = stats.interval_stdev();
    let sd = 2.5_f64.sqrt();
    assert_relative_eq!(lo, 3.0 - sd, epsilon = 1e-12);
    assert_relative_eq!(hi, 3.0 + sd, epsilon = 1e-12);
    assert!(lo >= 1.0 && hi <= 5.0);
}

#[test]
fn test_interval_stdev_clamped_to_data() {
    // mean 3.25, stdev 4.5: the lower bound would be -1.25.
    let stats = ScalarAnalysis::new(vec![1.0, 1.0, 1.0, 10.0]).unwrap();
    let (lo, hi) = stats.interval_stdev();
    assert_eq!(lo, 1.0);
    assert_relative_eq!(hi, 7.75, epsilon = 1e-12);
}

#[test]
fn test_ci95_two_sided_at_n100() {
    // left·N = 2.5000000000000022 -> 3, right·N = 97.5 -> 98 (ties to even).
    let data: Vec<f64> = one_to(100).into_iter().rev().collect();
    let stats = ScalarAnalysis::new(data).unwrap();
    assert_eq!(stats.interval_ci95_2sided(), (4.0, 99.0));
    assert_eq!(stats.interval_ci_2sided(0.95).unwrap(), (4.0, 99.0));
}

#[test]
fn test_ci_two_sided_exact_halves_round_to_even() {
    // left·N = 2.5 -> 2, right·N = 7.5 -> 8.
    let stats = ScalarAnalysis::new(one_to(10)).unwrap();
    assert_eq!(stats.interval_ci_2sided(0.5).unwrap(), (3.0, 9.0));
}

#[test]
fn test_ci_two_sided_upper_index_clamped() {
    // right·N = 1.95 -> 2, clamped to N - 1 = 1.
    let stats = ScalarAnalysis::new(vec![10.0, 20.0]).unwrap();
    assert_eq!(stats.interval_ci95_2sided(), (10.0, 20.0));
}

#[test]
fn test_ci_one_sided() {
    let stats = ScalarAnalysis::new(one_to(5)).unwrap();
    // ci·N = 2.5 -> 2
    assert_eq!(stats.bound_ci_1sided(0.5).unwrap(), 3.0);
    // ci·N = 4.95 -> 5, clamped to 4
    assert_eq!(stats.bound_ci_1sided(0.99).unwrap(), 5.0);

    let stats = ScalarAnalysis::new(one_to(100)).unwrap();
    assert_eq!(stats.bound_ci_1sided(0.95).unwrap(), 96.0);
}

#[test]
fn test_invalid_confidence_level() {
    let stats = ScalarAnalysis::new(one_to(10)).unwrap();
    for ci in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
        assert!(matches!(
            stats.interval_ci_2sided(ci),
            Err(DtiError::InvalidConfidence(_))
        ));
        assert!(matches!(
            stats.bound_ci_1sided(ci),
            Err(DtiError::InvalidConfidence(_))
        ));
    }
}

#[test]
fn test_free_confidence_functions() {
    let data = one_to(100);
    assert_eq!(ci_2sided(&data, 0.95), Some((4.0, 99.0)));
    assert_eq!(ci_1sided(&data, 0.95), Some(96.0));
    assert_eq!(ci_1sided::<f64>(&[], 0.95), None);
    assert_eq!(ci_2sided::<f64>(&[], 0.95), None);
}

#[test]
fn test_f32_statistics() {
    let stats = ScalarAnalysis::new(vec![1.0_f32, 2.0, 3.0, 4.0]).unwrap();
    assert_relative_eq!(stats.mean(), 2.5_f32);
    assert_relative_eq!(stats.median(), 2.5_f32);
    assert_eq!(stats.interval_minmax(), (1.0, 4.0));
}
