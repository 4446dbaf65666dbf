//! Sample moments: mean, variance and central moments.
//!
//! ## Design notes
//!
//! * Variance uses the two-pass formula with Bessel's correction (n - 1).
//! * Central moments use the population normalisation (n), as required by
//!   the tensor mode.

// External dependencies
use num_traits::Float;

/// Arithmetic mean. NaN for empty input.
#[inline]
pub fn mean<T: Float>(x: &[T]) -> T {
    let n = T::from(x.len()).unwrap();
    x.iter().fold(T::zero(), |acc, &v| acc + v) / n
}

/// Sample variance with Bessel's correction. NaN for fewer than two points.
pub fn sample_variance<T: Float>(x: &[T]) -> T {
    if x.len() < 2 {
        return T::nan();
    }
    let m = mean(x);
    let ss = x.iter().fold(T::zero(), |acc, &v| acc + (v - m) * (v - m));
    ss / T::from(x.len() - 1).unwrap()
}

/// Sample standard deviation.
#[inline]
pub fn sample_stdev<T: Float>(x: &[T]) -> T {
    sample_variance(x).sqrt()
}

/// Population central moment of order `k` about `center`: `Σ(xᵢ - c)^k / n`.
pub fn central_moment<T: Float>(x: &[T], center: T, k: i32) -> T {
    let n = T::from(x.len()).unwrap();
    x.iter().fold(T::zero(), |acc, &v| acc + (v - center).powi(k)) / n
}
