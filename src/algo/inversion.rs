//! Inversion identity for |z| ≥ 2:
//!
//!   Li_n(z) = g_n(z) - (-1)^n · Li_n(1/z)
//!
//! with, for n ≥ 1,
//!
//!   g_n(z) = -(2πi)^n / n! · B_n(log z / 2πi)
//!            - Θ(z) · 2πi · (log z)^(n-1) / (n-1)!
//!
//! and g_0 = -1, g_n = 0 for n < 0.

use num_complex::Complex;

use crate::algo::bernoulli::bernoulli_polynomial;
use crate::algo::factorial::pow_over_factorial;
use crate::machine::PolylogFloat;
use crate::utils::{mul_i, zlog};

/// Θ(z): 1 when `z` is in the lower half-plane or on the real axis
/// beyond 1, else 0.
///
/// The real axis beyond 1 belongs to the lower side, matching the value of
/// Li_n approached from below the cut.
#[inline]
pub(crate) fn branch_indicator<T: PolylogFloat>(z: Complex<T>) -> bool {
    z.im < T::zero() || (z.im == T::zero() && z.re > T::one())
}

/// The closed-form part g_n(z) of the inversion identity.
pub(crate) fn g_n<T: PolylogFloat>(n: i32, z: Complex<T>) -> Complex<T> {
    let zero = T::zero();
    let one = T::one();
    if n < 0 {
        return Complex::new(zero, zero);
    }
    if n == 0 {
        return Complex::new(-one, zero);
    }

    let k = n.unsigned_abs();
    let two_pi = T::from_f64(2.0) * T::PI();
    let log_z = zlog(z);

    // (2πi)^n / n!, built as Π (2πi/j)
    let coef = (1..=k).fold(Complex::new(one, zero), |acc, j| {
        mul_i(acc) * (two_pi / T::from_f64(f64::from(j)))
    });
    // log z / 2πi = -i · log z / 2π
    let w = -mul_i(log_z) / two_pi;
    let mut g = -coef * bernoulli_polynomial(k, w);

    if branch_indicator(z) {
        g = g - mul_i(pow_over_factorial(log_z, k - 1)) * two_pi;
    }
    g
}
