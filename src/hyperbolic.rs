//! Hyperbolic and inverse-hyperbolic functions.
//!
//! Everything here is a thin closed-form identity over [`crate::explog`]
//! and [`crate::roots`]; the accuracy profile is inherited wholesale from
//! [`exp`], [`ln`], and [`sqrt`]. The `e^{2a}` forms used by [`tanh`] and
//! [`coth`] overflow for |a| beyond ~355 and then evaluate ∞/∞ = NaN, as
//! the direct identities do.

use crate::classify::is_finite;
use crate::explog::{exp, ln};
use crate::roots::sqrt;

/// Hyperbolic sine, `(e^a − e^{−a}) / 2`.
///
/// # Examples
/// ```
/// use mathcore::hyperbolic::sinh;
/// assert_eq!(sinh(0.0), 0.0);
/// assert!((sinh(1.0) - 1.1752011936438014).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn sinh(a: f64) -> f64 {
    debug_assert!(is_finite(a), "sinh: non-finite argument");
    if a == 0.0 {
        return 0.0;
    }
    let ea = exp(a);
    (ea - 1.0 / ea) / 2.0
}

/// Hyperbolic cosine, `(e^a + e^{−a}) / 2`.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn cosh(a: f64) -> f64 {
    debug_assert!(is_finite(a), "cosh: non-finite argument");
    if a == 0.0 {
        return 1.0;
    }
    let ea = exp(a);
    (ea + 1.0 / ea) / 2.0
}

/// Hyperbolic tangent via the `e^{2a}` form `(e^{2a} − 1) / (e^{2a} + 1)`.
///
/// # Examples
/// ```
/// use mathcore::hyperbolic::tanh;
/// assert_eq!(tanh(0.0), 0.0);
/// assert!((tanh(1.0) - 0.7615941559557649).abs() < 1e-9);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn tanh(a: f64) -> f64 {
    debug_assert!(is_finite(a), "tanh: non-finite argument");
    if a == 0.0 {
        return 0.0;
    }
    let e2a = exp(2.0 * a);
    (e2a - 1.0) / (e2a + 1.0)
}

/// Hyperbolic secant, `2 / (e^a + e^{−a})`.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn sech(a: f64) -> f64 {
    debug_assert!(is_finite(a), "sech: non-finite argument");
    if a == 0.0 {
        return 1.0;
    }
    let ea = exp(a);
    2.0 / (ea + 1.0 / ea)
}

/// Hyperbolic cosecant, `2 / (e^a − e^{−a})`.
///
/// Divides by zero at `a == 0` and yields infinity.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn csch(a: f64) -> f64 {
    debug_assert!(is_finite(a), "csch: non-finite argument");
    let ea = exp(a);
    2.0 / (ea - 1.0 / ea)
}

/// Hyperbolic cotangent via the `e^{2a}` form `(e^{2a} + 1) / (e^{2a} − 1)`.
///
/// Divides by zero at `a == 0` and yields infinity.
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn coth(a: f64) -> f64 {
    debug_assert!(is_finite(a), "coth: non-finite argument");
    let e2a = exp(2.0 * a);
    (e2a + 1.0) / (e2a - 1.0)
}

/// Inverse hyperbolic sine, `ln(a + √(a² + 1))`.
///
/// # Examples
/// ```
/// use mathcore::hyperbolic::{asinh, sinh};
/// let x = 1.25;
/// assert!((asinh(sinh(x)) - x).abs() < 1e-6);
/// ```
///
/// # Panics
/// In debug builds, panics if `a` is not finite.
pub fn asinh(a: f64) -> f64 {
    debug_assert!(is_finite(a), "asinh: non-finite argument");
    ln(a + sqrt(a * a + 1.0))
}

/// Inverse hyperbolic cosine, `ln(a + √(a² − 1))`.
///
/// # Panics
/// In debug builds, panics if `a` is not finite or below 1.
pub fn acosh(a: f64) -> f64 {
    debug_assert!(is_finite(a), "acosh: non-finite argument");
    debug_assert!(a >= 1.0, "acosh: argument {a} below 1");
    ln(a + sqrt(a * a - 1.0))
}

/// Inverse hyperbolic tangent, `½ ln((1 + a) / (1 − a))`.
///
/// # Panics
/// In debug builds, panics if `a` is not finite or outside `(-1, 1)`.
pub fn atanh(a: f64) -> f64 {
    debug_assert!(is_finite(a), "atanh: non-finite argument");
    debug_assert!(
        a > -1.0 && a < 1.0,
        "atanh: argument {a} outside (-1, 1)"
    );
    0.5 * ln((1.0 + a) / (1.0 - a))
}

// ============================================================================
// Tests
// ============================================================================
