//! Order statistics: median and empirical confidence bounds.
//!
//! ## Purpose
//!
//! This module provides the index arithmetic behind the empirical
//! (order-statistic) confidence intervals and the median used by
//! `ScalarAnalysis`.
//!
//! ## Design notes
//!
//! * **Algorithm**: Median uses Quickselect for O(n) selection.
//! * **Empirical**: Confidence bounds pick values from the sorted data by index;
//!   no distributional assumption is made.
//! * **Rounding**: Index products are rounded half-to-even, on the value as
//!   computed in floating point. For N = 100 and ci = 0.95 the lower product
//!   is 2.5000000000000022, which rounds to 3.
//!
//! ## Key concepts
//!
//! * **Two-sided**: `left = (1 - ci) / 2`, `right = ci + left`;
//!   indices `round(left * N)` and `min(round(right * N), N - 1)`.
//! * **One-sided**: index `min(round(ci * N), N - 1)`.
//!
//! ## Non-goals
//!
//! * This module does not validate the confidence level or handle NaN.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Rounding and Indices
// ============================================================================

/// Round to the nearest integer, ties to even.
#[inline]
pub fn round_half_even<T: Float>(x: T) -> T {
    let rounded = x.round();
    let two = T::one() + T::one();
    if (x - x.trunc()).abs() == T::from(0.5).unwrap() {
        // `round` breaks ties away from zero; pull back to the even neighbour.
        two * (x / two).round()
    } else {
        rounded
    }
}

/// Convert a non-negative rounded float to an index, clamped to `n - 1`.
#[inline]
fn clamped_index<T: Float>(product: T, n: usize) -> usize {
    let idx = round_half_even(product).max(T::zero()).to_usize().unwrap_or(n);
    idx.min(n.saturating_sub(1))
}

/// Sorted indices `(lower, upper)` of a two-sided empirical interval over `n` points.
pub fn ci_2sided_indices<T: Float>(n: usize, ci: T) -> (usize, usize) {
    let n_t = T::from(n).unwrap();
    let left = (T::one() - ci) / (T::one() + T::one());
    let right = ci + left;
    (clamped_index(left * n_t, n), clamped_index(right * n_t, n))
}

/// Sorted index of the finite bound of a one-sided empirical interval over `n` points.
pub fn ci_1sided_index<T: Float>(n: usize, ci: T) -> usize {
    clamped_index(ci * T::from(n).unwrap(), n)
}

// ============================================================================
// Confidence Bounds
// ============================================================================

/// Sorted copy of the data, ascending.
pub fn sorted<T: Float>(x: &[T]) -> Vec<T> {
    let mut out = x.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    out
}

/// Two-sided empirical confidence interval `(lower, upper)`.
///
/// Returns `None` for empty input.
pub fn ci_2sided<T: Float>(x: &[T], ci: T) -> Option<(T, T)> {
    if x.is_empty() {
        return None;
    }
    let (lo, hi) = ci_2sided_indices(x.len(), ci);
    let x_sorted = sorted(x);
    Some((x_sorted[lo], x_sorted[hi]))
}

/// Finite bound of a one-sided empirical confidence interval.
///
/// Returns `None` for empty input.
pub fn ci_1sided<T: Float>(x: &[T], ci: T) -> Option<T> {
    if x.is_empty() {
        return None;
    }
    let idx = ci_1sided_index(x.len(), ci);
    let x_sorted = sorted(x);
    Some(x_sorted[idx])
}

// ============================================================================
// Median
// ============================================================================

/// Median of the data, computed on a scratch copy.
pub fn median<T: Float>(x: &[T]) -> T {
    let mut scratch = x.to_vec();
    median_inplace(&mut scratch)
}

/// Compute the median in-place using Quickselect.
///
/// Returns NaN for empty input. The slice is reordered.
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::nan();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 0 {
        // Largest value of the lower half.
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);
        (lower + upper) / (T::one() + T::one())
    } else {
        upper
    }
}
