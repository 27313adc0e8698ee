//! Minimal-standard linear congruential generator.
//!
//! The generator is an explicit value type: construct one per independent
//! stream (and per thread — there is no internal synchronization, and the
//! determinism guarantee only holds under serialized access). Seeding is
//! either explicit and reproducible ([`Lcg::new`]) or drawn once from the
//! wall clock ([`Lcg::from_entropy`]); after construction every step is a
//! pure function of the previous state.

use std::time::{SystemTime, UNIX_EPOCH};

/// Modulus 2³¹ − 1, the Mersenne prime of the minimal standard generator.
const MODULUS: u64 = 2_147_483_647;

/// Multiplier 7⁵, a primitive root modulo [`MODULUS`].
const MULTIPLIER: u64 = 16_807;

/// Park–Miller "minimal standard" linear congruential generator.
///
/// State advances by `state ← (16807 · state) mod (2³¹ − 1)` and is always
/// in `[1, 2³¹ − 2]`; the full cycle visits every value in that range
/// before repeating.
///
/// Reference: Park & Miller (1988), "Random Number Generators: Good Ones
/// Are Hard to Find", *CACM* 31(10).
///
/// # Examples
/// ```
/// use mathcore::random::Lcg;
/// let mut rng = Lcg::new(42);
/// let roll = rng.int_in_range(1, 6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Creates a generator from an explicit seed. Deterministic: equal
    /// seeds produce equal sequences.
    ///
    /// The seed is folded into the valid state range `[1, 2³¹ − 2]`; a
    /// seed congruent to zero is nudged to 1, since zero is a fixed point
    /// of the recurrence.
    pub fn new(seed: u64) -> Self {
        let s = seed % MODULUS;
        Self {
            state: if s == 0 { 1 } else { s },
        }
    }

    /// Creates a generator seeded from the wall clock, combined with the
    /// fixed multiplier so that low-resolution clocks still vary the
    /// state. Non-deterministic by design; use [`Lcg::new`] for
    /// reproducible streams.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(MULTIPLIER);
        Self::new(nanos ^ MULTIPLIER)
    }

    /// Advances the generator one step and returns the raw state, a value
    /// in `[1, 2³¹ − 2]`.
    pub fn next_raw(&mut self) -> u64 {
        self.state = (MULTIPLIER * self.state) % MODULUS;
        self.state
    }

    /// Returns a pseudo-random integer in `[low, high]`, both inclusive.
    ///
    /// # Algorithm
    /// One raw step, scaled by modulo into the requested span. The modulo
    /// scaling carries a small bias toward the low end of the span,
    /// proportional to `span / 2³¹`; spans wider than the modulus cannot
    /// be covered at all.
    ///
    /// # Panics
    /// In debug builds, panics if `low > high`.
    pub fn int_in_range(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(low <= high, "int_in_range: empty range [{low}, {high}]");
        let span = (high as i64 - low as i64 + 1) as u64;
        let offset = (self.next_raw() - 1) % span;
        (low as i64 + offset as i64) as i32
    }
}

// ============================================================================
// Tests
// ============================================================================
