//! Bernoulli numbers B_m and Bernoulli polynomials B_n(x).
//!
//! Uses the convention B_1 = -1/2. Indices up to 20 come from an exact
//! table; larger even indices use
//!   B_{2k} = (-1)^{k+1} · 2 · ζ(2k) · (2k)! / (2π)^{2k},
//! with the factorial and the power folded into one product so the
//! intermediate values stay in range until the result itself overflows
//! (around m = 260 for f64).

use crate::algo::constants::BERNOULLI_EVEN;
use crate::algo::zeta::zeta_positive;
use crate::machine::PolylogFloat;
use crate::scalar::Scalar;

/// The Bernoulli number B_m, with B_1 = -1/2.
pub fn bernoulli_number<T: PolylogFloat>(m: u32) -> T {
    if m == 1 {
        return T::from_f64(-0.5);
    }
    if m % 2 == 1 {
        return T::zero();
    }
    let half = (m / 2) as usize;
    if let Some(&b) = BERNOULLI_EVEN.get(half) {
        return T::from_f64(b);
    }

    let two_pi = T::from_f64(2.0) * T::PI();
    let mut ratio = T::one();
    for j in 1..=m {
        ratio = ratio * (T::from_f64(f64::from(j)) / two_pi);
        if ratio.is_infinite() {
            break;
        }
    }
    let magnitude = if ratio.is_infinite() {
        ratio
    } else {
        T::from_f64(2.0) * zeta_positive::<T>(m) * ratio
    };
    if half % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}

/// The Bernoulli polynomial B_n(x) = Σ_{k=0}^{n} C(n,k) · B_{n-k} · x^k.
///
/// Direct finite sum, for real or complex `x`. The alternating terms cancel
/// badly for large n; the result may then be inaccurate or non-finite,
/// which callers can check with `is_finite`.
pub fn bernoulli_polynomial<T: PolylogFloat, S: Scalar<Real = T>>(n: u32, x: S) -> S {
    let mut sum = S::from_real(T::zero());
    let mut binom = T::one();
    let mut xk = S::from_real(T::one());
    for k in 0..=n {
        sum = sum + xk.scale(binom * bernoulli_number::<T>(n - k));
        // C(n, k+1) = C(n, k) · (n - k) / (k + 1)
        binom = binom * T::from_f64(f64::from(n - k)) / T::from_f64(f64::from(k + 1));
        xk = xk * x;
    }
    sum
}
