//! Named double-precision constants.
//!
//! Literal decimal expansions, truncated to what `f64` can hold. These are
//! the reference values the approximation modules reduce against; in
//! particular [`LN2`] and [`LOG2E`] drive the range reduction in
//! [`crate::explog`].

/// The circle constant π.
pub const PI: f64 = 3.1415926535897932;

/// τ = 2π, one full turn in radians.
pub const TAU: f64 = 6.2831853071795864;

/// Euler's number e, the base of the natural logarithm.
pub const E: f64 = 2.7182818284590452;

/// The golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.6180339887498948;

/// ln 2, the natural logarithm of two.
pub const LN2: f64 = 0.6931471805599453;

/// ln 10, the natural logarithm of ten.
pub const LN10: f64 = 2.3025850929940457;

/// log₂ e, the binary logarithm of e.
pub const LOG2E: f64 = 1.4426950408889634;

/// log₁₀ e, the decimal logarithm of e.
pub const LOG10E: f64 = 0.4342944819032518;

/// The Euler–Mascheroni constant γ.
pub const EULER: f64 = 0.5772156649015329;

/// Catalan's constant G.
pub const CATALAN: f64 = 0.9159655941772190;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_consistent() {
        // Relations that must hold between the constants themselves.
        assert!((TAU - 2.0 * PI).abs() < 1e-15);
        assert!((LOG2E * LN2 - 1.0).abs() < 1e-15);
        assert!((LOG10E * LN10 - 1.0).abs() < 1e-15);
        // φ satisfies φ² = φ + 1.
        assert!((PHI * PHI - PHI - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_constants_match_std() {
        // The literals are truncated expansions; they still round to the
        // same f64 bit patterns as the standard library's.
        assert_eq!(PI, std::f64::consts::PI);
        assert_eq!(E, std::f64::consts::E);
        assert_eq!(LN2, std::f64::consts::LN_2);
        assert_eq!(LN10, std::f64::consts::LN_10);
        assert_eq!(LOG2E, std::f64::consts::LOG2_E);
        assert_eq!(LOG10E, std::f64::consts::LOG10_E);
    }
}
