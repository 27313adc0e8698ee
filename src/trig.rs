//! Range-reduced Taylor trigonometry and inverse trigonometry.
//!
//! [`sin`] and [`cos`] reduce into `[-π, π]` by repeated ±2π steps and then
//! evaluate a fixed 7-term Taylor series; the truncation is a policy choice
//! (predictable cost), so accuracy tapers from ~1e-16 near zero to ~1e-5
//! at the edges of the reduced range. The reciprocal and quotient functions
//! ([`tan`], [`sec`], [`csc`], [`cot`]) are unguarded at their poles and
//! yield infinities or NaN through ordinary float division.
//!
//! The inverse functions are fixed-form approximations, not iterative
//! refinements: [`asin`] is a 7th-degree odd polynomial that loses accuracy
//! toward ±1, and [`atan`] keeps a historical rational formula that is only
//! roughly right near |a| = 1 — see its docs before relying on it.

use crate::classify::is_finite;
use crate::consts::PI;

/// Terms beyond the leading one in the [`sin`]/[`cos`] Taylor series.
const TAYLOR_TERMS: u32 = 7;

/// Degrees to radians.
///
/// # Examples
/// ```
/// use mathcore::trig::to_radian;
/// use mathcore::consts::PI;
/// assert!((to_radian(180.0) - PI).abs() < 1e-12);
/// ```
///
/// # Panics
/// In debug builds, panics if `deg` is not finite.
pub fn to_radian(deg: f64) -> f64 {
    debug_assert!(is_finite(deg), "to_radian: non-finite argument");
    deg * (PI / 180.0)
}

/// Radians to degrees.
///
/// # Panics
/// In debug builds, panics if `rad` is not finite.
pub fn to_degree(rad: f64) -> f64 {
    debug_assert!(is_finite(rad), "to_degree: non-finite argument");
    rad * (180.0 / PI)
}

/// Folds `a` into `[-π, π]` by repeated ±2π steps.
///
/// Cost grows linearly with |a| / 2π.
fn reduce_to_pi(mut a: f64) -> f64 {
    while a > PI {
        a -= 2.0 * PI;
    }
    while a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Sine by range reduction and a 7-term Taylor series.
///
/// # Algorithm
/// After folding into `[-π, π]`, accumulates the odd series starting from
/// `term = result = a` with the recurrence
/// `term ← term · (−a²) / ((2i)(2i+1))` for i = 1..=7 (so the polynomial
/// runs through the a¹⁵ term).
///
/// # Accuracy
/// ~1e-16 near zero, worsening to ~1e-5 at |a| = π after reduction.
///
/// # Examples
/// ```
/// use mathcore::trig::sin;
/// use mathcore::consts::PI;
/// assert_eq!(sin(0.0), 0.0);
/// assert!((sin(PI / 2.0) - 1.0).abs() < 1e-9);
/// assert!((sin(PI / 6.0) - 0.5).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn sin(a: f64) -> f64 {
    debug_assert!(is_finite(a), "sin: non-finite argument");

    let a = reduce_to_pi(a);
    let mut term = a;
    let mut result = a;
    for i in 1..=TAYLOR_TERMS {
        let i = i as f64;
        term *= -a * a / ((2.0 * i) * (2.0 * i + 1.0));
        result += term;
    }
    result
}

/// Cosine by range reduction and a 7-term Taylor series.
///
/// # Algorithm
/// As [`sin`], but the even series: `term = result = 1` and
/// `term ← term · (−a²) / ((2i−1)(2i))`, running through the a¹⁴ term.
///
/// # Examples
/// ```
/// use mathcore::trig::cos;
/// use mathcore::consts::PI;
/// assert_eq!(cos(0.0), 1.0);
/// assert!((cos(PI / 3.0) - 0.5).abs() < 1e-9);
/// assert!(cos(PI / 2.0).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn cos(a: f64) -> f64 {
    debug_assert!(is_finite(a), "cos: non-finite argument");

    let a = reduce_to_pi(a);
    let mut term = 1.0;
    let mut result = 1.0;
    for i in 1..=TAYLOR_TERMS {
        let i = i as f64;
        term *= -a * a / ((2.0 * i - 1.0) * (2.0 * i));
        result += term;
    }
    result
}

/// Tangent as `sin(a) / cos(a)`.
///
/// Unguarded at odd multiples of π/2, where the division blows up.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn tan(a: f64) -> f64 {
    debug_assert!(is_finite(a), "tan: non-finite argument");
    sin(a) / cos(a)
}

/// Secant as `1 / cos(a)`; unguarded at odd multiples of π/2.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn sec(a: f64) -> f64 {
    debug_assert!(is_finite(a), "sec: non-finite argument");
    1.0 / cos(a)
}

/// Cosecant as `1 / sin(a)`; unguarded at multiples of π.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn csc(a: f64) -> f64 {
    debug_assert!(is_finite(a), "csc: non-finite argument");
    1.0 / sin(a)
}

/// Cotangent as `cos(a) / sin(a)`; unguarded at multiples of π.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn cot(a: f64) -> f64 {
    debug_assert!(is_finite(a), "cot: non-finite argument");
    cos(a) / sin(a)
}

/// Arcsine by a fixed odd polynomial in a².
///
/// # Algorithm
/// The truncated binomial series
/// `a + a³/6 + 3a⁵/40 + 5a⁷/112 + 35a⁹/1152`, evaluated Horner-style in
/// a². This is a bounded-accuracy approximation, not an iterative method.
///
/// # Accuracy
/// ~1e-9 for |a| ≤ 0.1, ~1e-4 at |a| = 0.5, and off by as much as 0.25
/// as |a| approaches 1, where the true series converges too slowly for a
/// five-term truncation.
///
/// # Examples
/// ```
/// use mathcore::trig::asin;
/// assert_eq!(asin(0.0), 0.0);
/// assert!((asin(0.1) - 0.10016742).abs() < 1e-7);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite or outside `[-1, 1]`.
pub fn asin(a: f64) -> f64 {
    debug_assert!(is_finite(a), "asin: non-finite argument");
    debug_assert!((-1.0..=1.0).contains(&a), "asin: argument {a} outside [-1, 1]");

    let a2 = a * a;
    a + a * a2 * (1.0 / 6.0 + a2 * (3.0 / 40.0 + a2 * (5.0 / 112.0 + a2 * 35.0 / 1152.0)))
}

/// Arccosine as `π/2 − asin(a)`; inherits [`asin`]'s accuracy profile.
///
/// # Panics
/// In debug builds, panics if `a` is not finite or outside `[-1, 1]`.
pub fn acos(a: f64) -> f64 {
    debug_assert!(is_finite(a), "acos: non-finite argument");
    debug_assert!((-1.0..=1.0).contains(&a), "acos: argument {a} outside [-1, 1]");
    PI / 2.0 - asin(a)
}

/// Approximate arctangent, kept in its historical rational form.
///
/// # Accuracy
/// The formula `a / (1.28·a²)` is a coarse approximation: it is close to
/// the true arctangent only near |a| = 1 (where it gives 0.78125 against
/// π/4 ≈ 0.7854), diverges from it elsewhere, and evaluates `0/0` — NaN —
/// at `a = 0`. It is retained verbatim for compatibility with the
/// long-standing observable behavior; callers needing a real arctangent
/// should not use this.
///
/// # Examples
/// ```
/// use mathcore::trig::atan;
/// assert!((atan(1.0) - 0.78125).abs() < 1e-12);
/// assert!(atan(0.0).is_nan());
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn atan(a: f64) -> f64 {
    debug_assert!(is_finite(a), "atan: non-finite argument");
    a / (1.28 * a * a)
}

/// Quadrant-corrected arctangent of `a / b`.
///
/// # Algorithm
/// `b == 0` resolves directly to ±π/2 by the sign of `a` (0 at the
/// origin). Otherwise evaluates `atan(a / b)` and adds or subtracts π when
/// `b < 0` to land in the correct quadrant — the conventional atan2 branch
/// structure, built on the approximate [`atan`] (so it inherits both its
/// accuracy and its NaN at `a == 0` with nonzero `b`).
///
/// # Examples
/// ```
/// use mathcore::trig::atan2;
/// use mathcore::consts::PI;
/// assert_eq!(atan2(1.0, 0.0), PI / 2.0);
/// assert_eq!(atan2(-1.0, 0.0), -PI / 2.0);
/// assert_eq!(atan2(0.0, 0.0), 0.0);
/// ```
///
/// # Panics
/// In debug builds, panics if either argument is not finite.
pub fn atan2(a: f64, b: f64) -> f64 {
    debug_assert!(is_finite(a), "atan2: non-finite numerator");
    debug_assert!(is_finite(b), "atan2: non-finite denominator");

    if b == 0.0 {
        if a > 0.0 {
            return PI / 2.0;
        }
        if a < 0.0 {
            return -PI / 2.0;
        }
        return 0.0;
    }

    let result = atan(a / b);
    if b < 0.0 {
        if a >= 0.0 {
            return result + PI;
        }
        return result - PI;
    }
    result
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
        fn prop_pythagorean_identity(x in -20.0_f64..20.0) {
            let s = sin(x);
            let c = cos(x);
            // The fixed 7-term truncation leaves up to ~1e-5 of slack at
            // the edges of the reduced range.
            prop_assert!((s * s + c * c - 1.0).abs() < 1e-4, "x={}", x);
        }

        #[test]
        fn prop_sin_is_odd_cos_is_even(x in -20.0_f64..20.0) {
            prop_assert_eq!(sin(-x), -sin(x));
            prop_assert_eq!(cos(-x), cos(x));
        }

        #[test]
        fn prop_sin_bounded_after_reduction(x in -100.0_f64..100.0) {
            // Truncation can push slightly past ±1 near the range edges.
            prop_assert!(sin(x).abs() <= 1.0 + 1e-4);
            prop_assert!(cos(x).abs() <= 1.0 + 1e-4);
        }
    }
}
