//! Floating-point classification without the platform predicates.
//!
//! Every other module checks its domain preconditions through these
//! functions, so they deliberately avoid `f64::is_nan` / `f64::is_infinite`
//! and work purely through IEEE-754 comparison semantics: NaN is the only
//! value unequal to itself, and `x / x` is exactly `1.0` for every finite
//! nonzero `x`.

/// Returns true iff `a` is NaN.
///
/// # Algorithm
/// Self-inequality: NaN is the only IEEE-754 value for which `a != a`.
///
/// # Examples
/// ```
/// use mathcore::classify::is_nan;
/// assert!(is_nan(f64::NAN));
/// assert!(!is_nan(0.0));
/// assert!(!is_nan(f64::INFINITY));
/// ```
pub fn is_nan(a: f64) -> bool {
    a != a
}

/// Returns true iff `a` is positive or negative infinity, or NaN.
///
/// # Algorithm
/// Self-division probe: `a / a` is exactly `1.0` for finite nonzero `a`,
/// and NaN for infinities and NaN, so the probe fails the self-equality
/// test exactly for non-finite inputs. Zero is special-cased: `0.0 / 0.0`
/// is NaN too, and without the guard the probe would misclassify zero as
/// non-finite.
///
/// Note that NaN inputs also return true here; use [`is_nan`] to tell the
/// two apart.
///
/// # Examples
/// ```
/// use mathcore::classify::is_infinite;
/// assert!(is_infinite(f64::INFINITY));
/// assert!(is_infinite(f64::NEG_INFINITY));
/// assert!(!is_infinite(0.0));
/// assert!(!is_infinite(-12.5));
/// ```
pub fn is_infinite(a: f64) -> bool {
    if a == 0.0 {
        return false;
    }
    let probe = a / a;
    probe != probe
}

/// Returns true iff `a` is an ordinary finite value.
///
/// # Examples
/// ```
/// use mathcore::classify::is_finite;
/// assert!(is_finite(0.0));
/// assert!(is_finite(-1e300));
/// assert!(!is_finite(f64::NAN));
/// assert!(!is_finite(f64::INFINITY));
/// ```
pub fn is_finite(a: f64) -> bool {
    !is_infinite(a) && !is_nan(a)
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
        fn prop_matches_std_on_finite(x in -1e300_f64..1e300) {
            prop_assert_eq!(is_nan(x), x.is_nan());
            prop_assert_eq!(is_finite(x), x.is_finite());
            prop_assert!(!is_infinite(x));
        }
    }
}
