//! # mathcore
//!
//! Self-contained numeric primitives built from first principles.
//!
//! This crate reimplements the elementary mathematical functions (square
//! root, trigonometric, hyperbolic, exponential, logarithmic), integer
//! number-theory helpers, a seedable pseudo-random generator, and basic
//! descriptive statistics without delegating to a platform math library.
//! Every approximation is an explicit iterative or series-based method with
//! a stated termination policy and a stated accuracy.
//!
//! ## Modules
//!
//! - [`consts`] — Named double-precision constants (π, e, ln 2, …)
//! - [`classify`] — Floating-point classification without `f64::is_nan`
//! - [`scalar`] — Comparison and rounding helpers
//! - [`roots`] — Newton–Raphson square root and the fast inverse square root
//! - [`explog`] — Range-reduced exponential and natural logarithm
//! - [`trig`] — Range-reduced Taylor trigonometry and inverse trigonometry
//! - [`hyperbolic`] — Hyperbolic functions as closed forms over `exp`/`ln`
//! - [`integer`] — GCD/LCM, factorial, primality, integer powers
//! - [`random`] — Minimal-standard linear congruential generator
//! - [`stats`] — Sum, mean, median, mode, standard deviation
//!
//! ## Design Philosophy
//!
//! - **No libm, no shortcuts**: every transcendental value is produced by an
//!   algorithm visible in this crate
//! - **Stated termination policies**: fixed iteration counts where
//!   predictable cost matters, epsilon-driven truncation where accuracy does
//! - **Fail fast on misuse**: domain preconditions are checked with
//!   `debug_assert!`; out-of-domain arguments abort debug builds and are
//!   unspecified in release builds
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod classify;
pub mod consts;
pub mod explog;
pub mod hyperbolic;
pub mod integer;
pub mod random;
pub mod roots;
pub mod scalar;
pub mod stats;
pub mod trig;
