//! Comparison and rounding helpers.
//!
//! Thin comparison-based wrappers with one deliberate quirk: [`floor`],
//! [`ceil`], and [`round`] are built on integer truncation, so for negative
//! non-integral inputs they behave like truncation toward zero rather than
//! the IEEE rounding modes of the same name (`floor(-2.5) == -2`). That
//! behavior is part of the contract and is relied on by
//! [`crate::integer::fdiv`].

use crate::classify::is_finite;

/// Absolute value by comparison.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn abs(a: f64) -> f64 {
    debug_assert!(is_finite(a), "abs: non-finite argument");
    if a < 0.0 {
        -a
    } else {
        a
    }
}

/// The smaller of `a` and `b`.
///
/// # Panics
/// In debug builds, panics if either argument is not finite.
pub fn min(a: f64, b: f64) -> f64 {
    debug_assert!(is_finite(a) && is_finite(b), "min: non-finite argument");
    if a < b {
        a
    } else {
        b
    }
}

/// The larger of `a` and `b`.
///
/// # Panics
/// In debug builds, panics if either argument is not finite.
pub fn max(a: f64, b: f64) -> f64 {
    debug_assert!(is_finite(a) && is_finite(b), "max: non-finite argument");
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `value` into `[min_val, max_val]`.
///
/// # Examples
/// ```
/// use mathcore::scalar::clamp;
/// assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
/// assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
/// assert_eq!(clamp(2.0, 0.0, 3.0), 2.0);
/// ```
///
/// # Panics
/// In debug builds, panics if any argument is not finite.
pub fn clamp(value: f64, min_val: f64, max_val: f64) -> f64 {
    debug_assert!(
        is_finite(value) && is_finite(min_val) && is_finite(max_val),
        "clamp: non-finite argument"
    );
    if value < min_val {
        return min_val;
    }
    if value > max_val {
        return max_val;
    }
    value
}

/// Truncates `a` toward zero.
///
/// Equals the mathematical floor for non-negative inputs;
/// `floor(-2.5) == -2`, not `-3`.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn floor(a: f64) -> i32 {
    debug_assert!(is_finite(a), "floor: non-finite argument");
    a as i32
}

/// Smallest integer not below `a`, via the truncating [`floor`].
///
/// # Examples
/// ```
/// use mathcore::scalar::ceil;
/// assert_eq!(ceil(2.1), 3);
/// assert_eq!(ceil(3.0), 3);
/// assert_eq!(ceil(-2.5), -2);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn ceil(a: f64) -> i32 {
    debug_assert!(is_finite(a), "ceil: non-finite argument");
    let t = a as i32;
    if a > t as f64 {
        t + 1
    } else {
        t
    }
}

/// Rounds `a` to the nearest integer, halves upward.
///
/// Inherits the truncation quirk for negative inputs:
/// `round(-2.5) == -2` and `round(-2.6) == -2`.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn round(a: f64) -> i32 {
    debug_assert!(is_finite(a), "round: non-finite argument");
    let up = (a + 1.0) as i32;
    if a + 0.5 >= up as f64 {
        up
    } else {
        a as i32
    }
}

// ============================================================================
// Tests
// ============================================================================
