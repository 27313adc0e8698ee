//! Descriptive statistics over finite, nonempty slices of doubles.
//!
//! These are thin compositions over the approximation core — notably
//! [`std_dev`] closes through [`crate::roots::sqrt`] rather than the
//! platform square root. Preconditions (nonempty input, all elements
//! finite) are enforced with `debug_assert!` like everywhere else in the
//! crate; there is no `Option` channel.
//!
//! One inherited contract quirk to be aware of: [`mode`] scans runs of
//! *adjacent* equal values, so its result is only the true mode when the
//! caller passes sorted data. See its docs.

use crate::classify::is_finite;
use crate::roots::sqrt;

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|&x| is_finite(x))
}

/// Sum by plain left-to-right accumulation.
///
/// # Examples
/// ```
/// use mathcore::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
/// ```
///
/// # Panics
/// In debug builds, panics if `data` is empty or contains a non-finite
/// value.
pub fn sum(data: &[f64]) -> f64 {
    debug_assert!(!data.is_empty(), "sum: empty data");
    debug_assert!(all_finite(data), "sum: non-finite element");

    let mut total = 0.0;
    for &x in data {
        total += x;
    }
    total
}

/// Arithmetic mean, `sum / n`.
///
/// # Examples
/// ```
/// use mathcore::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
///
/// # Panics
/// In debug builds, panics if `data` is empty or contains a non-finite
/// value.
pub fn mean(data: &[f64]) -> f64 {
    debug_assert!(!data.is_empty(), "mean: empty data");
    sum(data) / data.len() as f64
}

/// Median without mutating the input.
///
/// Sorts a copy, then returns the middle element (or the average of the
/// two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use mathcore::stats::median;
/// assert_eq!(median(&[1.0, 3.0, 2.0, 4.0]), 2.5);
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// ```
///
/// # Panics
/// In debug builds, panics if `data` is empty or contains a non-finite
/// value.
pub fn median(data: &[f64]) -> f64 {
    debug_assert!(!data.is_empty(), "median: empty data");
    debug_assert!(all_finite(data), "median: non-finite element");

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("elements are finite"));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value, by scanning runs of adjacent equal elements.
///
/// The input is expected to be sorted; that obligation sits with the
/// caller and is not checked. On unsorted data the scan only sees
/// adjacency, not global frequency, and the result is meaningless. When
/// several values tie for the longest run, the earliest one wins; when
/// all values are distinct, the first element is returned.
///
/// # Examples
/// ```
/// use mathcore::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0]), 3.0);
/// ```
///
/// # Panics
/// In debug builds, panics if `data` is empty or contains a non-finite
/// value.
pub fn mode(data: &[f64]) -> f64 {
    debug_assert!(!data.is_empty(), "mode: empty data");
    debug_assert!(all_finite(data), "mode: non-finite element");

    let mut mode = data[0];
    let mut max_count = 1;
    let mut current_count = 1;

    for i in 1..data.len() {
        if data[i] == data[i - 1] {
            current_count += 1;
        } else {
            if current_count > max_count {
                max_count = current_count;
                mode = data[i - 1];
            }
            current_count = 1;
        }
    }
    if current_count > max_count {
        mode = data[data.len() - 1];
    }
    mode
}

/// Sample standard deviation (Bessel's `n − 1` denominator), closed
/// through the crate's own [`sqrt`].
///
/// # Examples
/// ```
/// use mathcore::stats::std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((std_dev(&v) - 2.138089935299395).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `data` has fewer than two elements or
/// contains a non-finite value.
pub fn std_dev(data: &[f64]) -> f64 {
    debug_assert!(data.len() > 1, "std_dev: need at least two elements");
    debug_assert!(all_finite(data), "std_dev: non-finite element");

    let m = mean(data);
    let mut accum = 0.0;
    for &x in data {
        let diff = x - m;
        accum += diff * diff;
    }
    sqrt(accum / (data.len() - 1) as f64)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0]), 1.0);
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(&[-1.0, 1.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "sum: empty data")]
    fn test_sum_rejects_empty() {
        sum(&[]);
    }

    #[test]
    #[should_panic(expected = "sum: non-finite element")]
    fn test_sum_rejects_nan() {
        sum(&[1.0, f64::NAN]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[5.0]), 5.0);
        assert_eq!(mean(&[-2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[1.0, 3.0, 2.0, 4.0]), 2.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[7.0]), 7.0);
        assert_eq!(median(&[2.0, 1.0]), 1.5);
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = [3.0, 1.0, 2.0];
        let _ = median(&data);
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mode_on_sorted_data() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), 2.0);
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0]), 3.0);
        // All distinct: the first element wins.
        assert_eq!(mode(&[1.0, 2.0, 3.0]), 1.0);
        // Tie: the earliest longest run wins.
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), 1.0);
        assert_eq!(mode(&[5.0]), 5.0);
    }

    #[test]
    fn test_mode_trailing_run() {
        // The final run is only inspected after the loop; a strictly
        // longer trailing run must still win.
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0]), 3.0);
        assert_eq!(mode(&[1.0, 3.0, 3.0]), 3.0);
    }

    #[test]
    fn test_std_dev_fixture() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&v) - 2.138089935299395).abs() < 1e-9);
    }

    #[test]
    fn test_std_dev_constant_data() {
        assert_eq!(std_dev(&[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "std_dev: need at least two elements")]
    fn test_std_dev_rejects_singleton() {
        std_dev(&[1.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=50)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prop_mean_within_extremes(data in finite_vec(1)) {
            let m = mean(&data);
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(m >= lo - 1e-6 && m <= hi + 1e-6);
        }

        #[test]
        fn prop_median_within_extremes(data in finite_vec(1)) {
            let med = median(&data);
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(med >= lo && med <= hi);
        }

        #[test]
        fn prop_std_dev_non_negative(data in finite_vec(2)) {
            prop_assert!(std_dev(&data) >= 0.0);
        }

        #[test]
        fn prop_shift_invariance(data in finite_vec(2), shift in -1e3_f64..1e3) {
            let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
            let tol = 1e-6 * (1.0 + std_dev(&data));
            prop_assert!((std_dev(&shifted) - std_dev(&data)).abs() < tol);
        }
    }
}
