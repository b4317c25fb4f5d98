//! Shared numerical constants used by multiple algorithm modules.
//!
//! Module-specific constants remain in their respective files.

/// Even-index Bernoulli numbers B_0, B_2, ..., B_20 as exact rationals.
///
/// Odd-index values vanish except B_1 = -1/2, which is handled separately.
#[rustfmt::skip]
pub(crate) const BERNOULLI_EVEN: [f64; 11] = [
    1.0,                       // B_0
    1.0 / 6.0,                 // B_2
    -1.0 / 30.0,               // B_4
    1.0 / 42.0,                // B_6
    -1.0 / 30.0,               // B_8
    5.0 / 66.0,                // B_10
    -691.0 / 2730.0,           // B_12
    7.0 / 6.0,                 // B_14
    -3617.0 / 510.0,           // B_16
    43867.0 / 798.0,           // B_18
    -174611.0 / 330.0,         // B_20
];

/// Radius of the disk where the direct power series is used.
pub(crate) const NEAR_ZERO_RADIUS: f64 = 0.5;

/// Radius of the smaller disk used by the direct series on the real axis.
pub(crate) const REAL_NEAR_ZERO_RADIUS: f64 = 0.25;

/// |z| at or beyond which the inversion identity (or doubling) applies.
pub(crate) const INVERSION_RADIUS: f64 = 2.0;

/// For n ≤ 0 the quadratic transform is only used on [-1/2, -1/4). Closer
/// to -1 its two terms cancel, and the near-one series is summed instead.
pub(crate) const QUADRATIC_TRANSFORM_LIMIT: f64 = 0.5;
