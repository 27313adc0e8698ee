//! Range-reduced natural exponential and logarithm.
//!
//! Both functions reduce their argument against powers of two before
//! applying a series, so the series only ever sees a small domain:
//!
//! - [`exp`] splits `a = k·ln2 + r` with `r ∈ [0, ln 2)` and evaluates the
//!   Taylor series of `e^r`, then reconstructs with `2^k`.
//! - [`ln`] folds `a` into `[1, 2)` by halving/doubling and evaluates the
//!   Mercator series of `ln(1 + u)`, then adds the folded exponent back as
//!   a multiple of ln 2.
//!
//! Unlike [`crate::roots::sqrt`]'s fixed iteration count, both series here
//! truncate adaptively on a term-magnitude epsilon.

use crate::classify::is_finite;
use crate::consts::{LN2, LOG2E};

/// Maximum Taylor terms [`exp`] will accumulate after the leading `1 + r`.
const EXP_MAX_TERMS: u32 = 12;

/// Relative term threshold at which [`exp`] stops accumulating.
const EXP_EPSILON: f64 = 1e-15;

/// Absolute term threshold at which [`ln`]'s series stops.
const LN_EPSILON: f64 = 1e-15;

/// Defensive bound on [`ln`]'s series length. The series terminates for
/// every reduced argument, but convergence slows as the reduced value
/// approaches 2; the cap turns a pathological stall into a bounded,
/// slightly less accurate answer.
const LN_MAX_TERMS: u64 = 1_000_000;

/// `⌊x⌋` as an integer, without `f64::floor`.
fn floor_i64(x: f64) -> i64 {
    let t = x as i64;
    if x < 0.0 && t as f64 != x {
        t.saturating_sub(1)
    } else {
        t
    }
}

/// `2^k` by repeated multiplication, negative exponents by reciprocal.
fn pow2(k: i64) -> f64 {
    let mut scale = 1.0_f64;
    for _ in 0..k.unsigned_abs() {
        scale *= 2.0;
        if scale == f64::INFINITY {
            break;
        }
    }
    if k < 0 {
        1.0 / scale
    } else {
        scale
    }
}

/// Natural exponential `e^a` by range-reduced Taylor series.
///
/// # Algorithm
/// Writes `a = k·ln2 + r` with `k = ⌊a·log₂e⌋`, so `r ∈ [0, ln 2)`.
/// The series for `e^r` starts at `1 + r` and accumulates terms
/// `r^i / i!` incrementally (`term ← term · r/i`) for up to 12 terms,
/// stopping early once a term's magnitude drops below `1e-15` times the
/// running sum. The result is scaled by
/// `2^k`, computed by repeated multiplication (reciprocal for negative k).
///
/// # Accuracy
/// Near machine precision for moderate arguments; overflows to infinity
/// (underflows to zero) once `2^k` leaves the finite range.
///
/// # Examples
/// ```
/// use mathcore::explog::exp;
/// use mathcore::consts::E;
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0) - E).abs() < 1e-9);
/// assert!((exp(-1.0) - 1.0 / E).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn exp(a: f64) -> f64 {
    debug_assert!(is_finite(a), "exp: non-finite argument");

    if a == 0.0 {
        return 1.0;
    }

    let k = floor_i64(a * LOG2E);
    let r = a - k as f64 * LN2;

    let mut result = 1.0 + r;
    let mut term = r;
    for i in 2..=EXP_MAX_TERMS {
        term *= r / i as f64;
        result += term;
        if term.abs() < EXP_EPSILON * result {
            break;
        }
    }

    result * pow2(k)
}

/// Natural logarithm by power-of-two reduction and the Mercator series.
///
/// # Algorithm
/// Folds `a` into `[1, 2)` by repeated halving (doubling for `a < 1`),
/// tracking the net exponent. With `u = a − 1 ∈ [0, 1)`, accumulates the
/// alternating series `u − u²/2 + u³/3 − …` through the recurrence
/// `y ← y · (−u) · (i−1)/i` until a term's magnitude falls below `1e-15`
/// or the defensive term cap is hit. The folded exponent re-enters as a
/// multiple of ln 2.
///
/// # Accuracy
/// About 1e-15 of truncation error for most arguments; reduced values very
/// close to 2 converge slowly and may hit the term cap, costing a few
/// digits in the last place.
///
/// # Examples
/// ```
/// use mathcore::explog::ln;
/// use mathcore::consts::{E, LN2};
/// assert_eq!(ln(1.0), 0.0);
/// assert!((ln(E) - 1.0).abs() < 1e-9);
/// assert!((ln(2.0) - LN2).abs() < 1e-12);
/// assert!((ln(0.5) + LN2).abs() < 1e-12);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite or not strictly positive.
pub fn ln(a: f64) -> f64 {
    debug_assert!(is_finite(a), "ln: non-finite argument");
    debug_assert!(a > 0.0, "ln: non-positive argument {a}");

    if a == 1.0 {
        return 0.0;
    }

    let mut a = a;
    let mut exponent: i64 = 0;
    while a >= 2.0 {
        a /= 2.0;
        exponent += 1;
    }
    while a < 1.0 {
        a *= 2.0;
        exponent -= 1;
    }

    let u = a - 1.0;
    let mut y = u;
    let mut sum = y;
    let mut i: u64 = 1;
    while y.abs() > LN_EPSILON && i < LN_MAX_TERMS {
        i += 1;
        y *= -u * (i - 1) as f64 / i as f64;
        sum += y;
    }

    sum + exponent as f64 * LN2
}

/// Logarithm of `a` in an arbitrary integer base, as `ln(a) / ln(base)`.
///
/// # Examples
/// ```
/// use mathcore::explog::log;
/// assert!((log(81.0, 3) - 4.0).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` or `base` violates [`ln`]'s domain.
pub fn log(a: f64, base: i32) -> f64 {
    ln(a) / ln(base as f64)
}

/// Base-2 logarithm, as `ln(a) / ln 2`.
///
/// # Panics
/// In debug builds, panics if `a` violates [`ln`]'s domain.
pub fn log2(a: f64) -> f64 {
    ln(a) / LN2
}

/// Base-10 logarithm, as `ln(a) / ln 10`.
///
/// # Panics
/// In debug builds, panics if `a` violates [`ln`]'s domain.
pub fn log10(a: f64) -> f64 {
    ln(a) / crate::consts::LN10
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::E;

    #[test]
    fn test_exp_known_values() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - E).abs() < 1e-12);
        assert!((exp(2.0) - E * E).abs() < 1e-11);
        assert!((exp(LN2) - 2.0).abs() < 1e-12);
        assert!((exp(10.0) - 22026.465794806718).abs() < 1e-7);
    }

    #[test]
    fn test_exp_negative_arguments() {
        assert!((exp(-1.0) - 1.0 / E).abs() < 1e-12);
        assert!((exp(-LN2) - 0.5).abs() < 1e-12);
        assert!((exp(-10.0) - 4.5399929762484854e-5).abs() < 1e-15);
    }

    #[test]
    fn test_exp_extremes() {
        // Past the finite range the 2^k reconstruction saturates.
        assert_eq!(exp(800.0), f64::INFINITY);
        assert_eq!(exp(-800.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "exp: non-finite argument")]
    fn test_exp_rejects_nan() {
        exp(f64::NAN);
    }

    #[test]
    fn test_ln_known_values() {
        assert_eq!(ln(1.0), 0.0);
        assert!((ln(E) - 1.0).abs() < 1e-12);
        assert!((ln(2.0) - LN2).abs() < 1e-15);
        assert!((ln(4.0) - 2.0 * LN2).abs() < 1e-15);
        assert!((ln(0.5) + LN2).abs() < 1e-15);
        assert!((ln(10.0) - crate::consts::LN10).abs() < 1e-12);
    }

    #[test]
    fn test_ln_powers_of_two_are_exact_multiples() {
        // Powers of two reduce to u = 0 and come back as pure k·ln2.
        assert_eq!(ln(2.0), LN2);
        assert_eq!(ln(1024.0), 10.0 * LN2);
        assert_eq!(ln(0.25), -2.0 * LN2);
    }

    #[test]
    #[should_panic(expected = "ln: non-positive argument")]
    fn test_ln_rejects_zero() {
        ln(0.0);
    }

    #[test]
    #[should_panic(expected = "ln: non-positive argument")]
    fn test_ln_rejects_negative() {
        ln(-3.0);
    }

    #[test]
    fn test_log_bases() {
        assert!((log(8.0, 2) - 3.0).abs() < 1e-12);
        assert!((log(81.0, 3) - 4.0).abs() < 1e-12);
        assert!((log2(1024.0) - 10.0).abs() < 1e-12);
        assert!((log10(1000.0) - 3.0).abs() < 1e-12);
        assert!((log10(0.01) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_trips_at_fixtures() {
        assert!((ln(exp(1.0)) - 1.0).abs() < 1e-6);
        for &x in &[0.001, 0.5, 1.0, 2.5, 100.0, 12345.0] {
            assert!((exp(ln(x)) - x).abs() / x < 1e-6, "x={x}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn prop_exp_ln_round_trip(x in 1e-6_f64..1e6) {
            let back = exp(ln(x));
            prop_assert!(((back - x) / x).abs() < 1e-6, "x={}, back={}", x, back);
        }

        #[test]
        fn prop_ln_exp_round_trip(x in -40.0_f64..40.0) {
            let back = ln(exp(x));
            prop_assert!((back - x).abs() < 1e-6, "x={}, back={}", x, back);
        }

        #[test]
        fn prop_ln_of_product(x in 0.01_f64..1e3, y in 0.01_f64..1e3) {
            let lhs = ln(x * y);
            let rhs = ln(x) + ln(y);
            prop_assert!((lhs - rhs).abs() < 1e-9);
        }

        #[test]
        fn prop_exp_positive(x in -100.0_f64..100.0) {
            prop_assert!(exp(x) > 0.0);
        }
    }
}
