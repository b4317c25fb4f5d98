//! Harmonic numbers H_q = 1 + 1/2 + ... + 1/q.

use crate::machine::PolylogFloat;

/// The q-th harmonic number; H_0 = 0.
///
/// Exact finite sum, used with small q (q = n - 1 in the near-one series).
pub fn harmonic_number<T: PolylogFloat>(q: u32) -> T {
    (1..=q).fold(T::zero(), |acc, i| acc + T::one() / T::from_f64(f64::from(i)))
}
