//! Integer number-theory helpers.
//!
//! Euclid's GCD and its LCM companion, an iterative factorial, trial-
//! division primality, and the integer-exponent power used by the series
//! modules. All arithmetic is checked in debug builds, so overflow aborts
//! rather than wrapping, in line with the crate-wide fail-fast policy.

use crate::classify::is_finite;
use crate::scalar::floor;

/// Greatest common divisor by Euclid's algorithm over absolute values.
///
/// `gcd(0, 0) == 0`.
///
/// # Examples
/// ```
/// use mathcore::integer::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-4, 6), 2);
/// assert_eq!(gcd(0, 5), 5);
/// ```
pub fn gcd(a: i32, b: i32) -> i32 {
    let mut a = if a < 0 { -a } else { a };
    let mut b = if b < 0 { -b } else { b };
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple through [`gcd`], normalized to be non-negative.
///
/// `lcm(a, 0) == 0`. For nonzero arguments,
/// `gcd(a, b) * lcm(a, b) == |a * b|`.
///
/// # Examples
/// ```
/// use mathcore::integer::lcm;
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(-4, 6), 12);
/// assert_eq!(lcm(7, 0), 0);
/// ```
pub fn lcm(a: i32, b: i32) -> i32 {
    let g = gcd(a, b);
    if g == 0 {
        return 0;
    }
    let l = a / g * b;
    if (a as i64) * (b as i64) >= 0 {
        l
    } else {
        -l
    }
}

/// Factorial as an iterative product.
///
/// Accumulates in `u64`; `fact(0) == fact(1) == 1`. Arguments above 20
/// overflow, which aborts debug builds through Rust's checked arithmetic.
///
/// # Examples
/// ```
/// use mathcore::integer::fact;
/// assert_eq!(fact(0), 1);
/// assert_eq!(fact(5), 120);
/// assert_eq!(fact(12), 479_001_600);
/// ```
pub fn fact(a: u32) -> u64 {
    let mut result: u64 = 1;
    for i in 2..=a as u64 {
        result *= i;
    }
    result
}

/// Remainder of `a` modulo `b`, always in `[0, b)`.
///
/// # Examples
/// ```
/// use mathcore::integer::rem;
/// assert_eq!(rem(7, 3), 1);
/// assert_eq!(rem(-7, 3), 2);
/// ```
///
/// # Panics
/// In debug builds, panics if `b <= 0`.
pub fn rem(a: i32, b: i32) -> i32 {
    debug_assert!(b > 0, "rem: non-positive divisor {b}");
    a.rem_euclid(b)
}

/// Floored division of doubles through the truncating [`floor`].
///
/// Because [`floor`] truncates toward zero, `fdiv(-7.0, 2.0) == -3`,
/// not `-4`.
///
/// # Panics
/// In debug builds, panics if either argument is not finite or `b <= 0`.
pub fn fdiv(a: f64, b: f64) -> i32 {
    debug_assert!(is_finite(a) && is_finite(b), "fdiv: non-finite argument");
    debug_assert!(b > 0.0, "fdiv: non-positive divisor {b}");
    floor(a / b)
}

/// `base` raised to a non-negative integer power by repeated
/// multiplication.
///
/// `pow(base, 0) == 1` for every base. Negative exponents are outside the
/// contract; compute `1.0 / pow(base, -power)` at the call site instead.
///
/// # Examples
/// ```
/// use mathcore::integer::pow;
/// assert_eq!(pow(2.0, 10), 1024.0);
/// assert_eq!(pow(5.0, 0), 1.0);
/// assert_eq!(pow(-2.0, 3), -8.0);
/// ```
///
/// # Panics
/// In debug builds, panics if `base` is not finite or `power` is negative.
pub fn pow(base: f64, power: i32) -> f64 {
    debug_assert!(is_finite(base), "pow: non-finite base");
    debug_assert!(power >= 0, "pow: negative exponent {power}");

    if power == 0 {
        return 1.0;
    }
    let mut product = base;
    for _ in 1..power {
        product *= base;
    }
    product
}

/// Primality by trial division up to `a / 2`, with an even shortcut.
///
/// # Examples
/// ```
/// use mathcore::integer::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91)); // 7 × 13
/// ```
pub fn is_prime(a: i32) -> bool {
    if a < 2 {
        return false;
    }
    if a > 2 && a % 2 == 0 {
        return false;
    }
    for i in 2..a / 2 {
        if a % i == 0 {
            return false;
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
