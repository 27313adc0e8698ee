//! Newton–Raphson square root and the fast inverse square root.
//!
//! Two deliberately different accuracy/cost policies live here:
//!
//! - [`sqrt`] runs a *fixed* count of Newton–Raphson iterations, trading
//!   worst-case accuracy on extreme magnitudes for fully predictable cost.
//! - [`quick_inverse_sqrt`] is the classic bit-level initial guess
//!   (magic constant `0x5f3759df`) polished by exactly two Newton steps.

use crate::classify::is_finite;

/// Number of Newton–Raphson iterations [`sqrt`] always performs.
const SQRT_ITERATIONS: u32 = 16;

/// Square root by fixed-count Newton–Raphson iteration.
///
/// # Algorithm
/// Starting from x₀ = a, applies `x ← (x + a/x) / 2` exactly 16 times.
/// The iteration count is a policy choice:
/// convergence is quadratic once the iterate is near √a, so moderate
/// magnitudes reach full double precision, but the early iterations only
/// halve the estimate, so accuracy degrades for arguments far above ~1e7.
///
/// # Accuracy
/// `sqrt(x) * sqrt(x)` is within `1e-9` of `x` across the moderate range;
/// see the property tests.
///
/// # Examples
/// ```
/// use mathcore::roots::sqrt;
/// assert!((sqrt(2.0) - 1.41421356).abs() < 1e-8);
/// assert_eq!(sqrt(0.0), 0.0);
/// assert!((sqrt(144.0) - 12.0).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite or is negative.
pub fn sqrt(a: f64) -> f64 {
    debug_assert!(is_finite(a), "sqrt: non-finite argument");
    debug_assert!(a >= 0.0, "sqrt: negative argument {a}");

    if a == 0.0 {
        return 0.0;
    }

    let mut x = a;
    for _ in 0..SQRT_ITERATIONS {
        x = (x + a / x) / 2.0;
    }
    x
}

/// `1 / sqrt(a)`, through the full-precision [`sqrt`].
///
/// # Examples
/// ```
/// use mathcore::roots::inverse_sqrt;
/// assert!((inverse_sqrt(4.0) - 0.5).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite; a negative argument trips
/// the domain check inside [`sqrt`]. `a == 0` divides by zero and yields
/// infinity.
pub fn inverse_sqrt(a: f64) -> f64 {
    debug_assert!(is_finite(a), "inverse_sqrt: non-finite argument");
    1.0 / sqrt(a)
}

/// Fast approximate `1 / sqrt(a)` via the bit-hack initial guess.
///
/// # Algorithm
/// The argument's single-precision bit pattern is reinterpreted as an
/// integer, the estimate `0x5f3759df - (bits >> 1)` is reinterpreted back
/// as a float (the magic constant is specific to the 32-bit IEEE-754
/// layout, which is why the guess goes through `f32`), and the guess is
/// refined with exactly two Newton steps `y ← y · (1.5 − 0.5·a·y²)` carried
/// out in double precision. Reinterpretation uses `to_bits`/`from_bits`;
/// no lossy string or decimal path.
///
/// Reference: Lomont (2003), "Fast Inverse Square Root".
///
/// # Accuracy
/// Within 0.2% of `1 / sqrt(a)` for positive `a` in the single-precision
/// range; the two Newton steps usually leave far less than that.
///
/// # Examples
/// ```
/// use mathcore::roots::quick_inverse_sqrt;
/// assert!((quick_inverse_sqrt(4.0) - 0.5).abs() < 1e-3);
/// assert!((quick_inverse_sqrt(1.0) - 1.0).abs() < 1e-3);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite. Non-positive arguments
/// produce a meaningless result, as in the classic formulation.
pub fn quick_inverse_sqrt(a: f64) -> f64 {
    debug_assert!(is_finite(a), "quick_inverse_sqrt: non-finite argument");

    let half = a * 0.5;
    let bits = (a as f32).to_bits() as i32;
    let guess_bits = 0x5f3759df_i32.wrapping_sub(bits >> 1);
    let mut y = f32::from_bits(guess_bits as u32) as f64;

    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_sqrt_round_trip(x in 1e-6_f64..1e6) {
            let r = sqrt(x);
            // Tolerance scales with the magnitude of x for large inputs.
            let tol = 1e-9 * if x > 1.0 { x } else { 1.0 };
            prop_assert!((r * r - x).abs() <= tol, "x={}, r={}", x, r);
        }

        #[test]
        fn prop_sqrt_monotone(x in 1e-6_f64..1e6, y in 1e-6_f64..1e6) {
            let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
            prop_assert!(sqrt(lo) <= sqrt(hi) + 1e-12);
        }

        #[test]
        fn prop_quick_inverse_sqrt_close(x in 1e-3_f64..1e6) {
            let approx = quick_inverse_sqrt(x);
            let exact = 1.0 / sqrt(x);
            prop_assert!(((approx - exact) / exact).abs() < 0.002);
        }
    }
}
