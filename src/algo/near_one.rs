//! Expansion of Li_n(z) around z = 1 in powers of log z, for n ≥ 1.
//!
//!   Li_n(z) = Σ_{m≥0, m≠n-1} ζ(n-m)/m! · (log z)^m
//!             + (log z)^(n-1)/(n-1)! · [H_{n-1} - log(-log z)]
//!
//! Converges for |log z| < 2π. The m = n-1 term would need ζ(1) and is
//! replaced by the harmonic-number correction, added once after the loop.

use crate::algo::factorial::pow_over_factorial;
use crate::algo::harmonic::harmonic_number;
use crate::algo::zeta::zeta;
use crate::algo::Series;
use crate::config::Budget;
use crate::machine::PolylogFloat;
use crate::scalar::Scalar;

/// Near-one series for order `n ≥ 1`.
///
/// On the real axis `z` must lie in (0, 1). For complex `z` on the real
/// axis beyond 1, log(-log z) takes argument +π, which gives the value
/// approached from below the cut, consistent with the inversion identity.
pub(crate) fn f_n_1<T: PolylogFloat, S: Scalar<Real = T>>(
    n: i32,
    z: S,
    budget: &Budget<T>,
) -> Series<S> {
    debug_assert!(n >= 1);
    let log_z = z.log_principal();

    let mut sum = S::from_real(T::zero());
    // (log z)^m / m!
    let mut lm = S::from_real(T::one());
    let mut terms = 0;
    let mut converged = false;

    for m in 0..budget.max_terms {
        let s = n - m as i32;
        if s != 1 {
            let coef = zeta::<T>(s);
            let part = lm.scale(coef);
            sum = sum + part;
            terms = m + 1;
            if coef != T::zero() && part.modulus() <= budget.tol {
                converged = true;
                break;
            }
        }
        lm = lm * log_z.scale(T::one() / T::from_usize(m + 1));
    }

    let q = n.unsigned_abs() - 1;
    let bracket = S::from_real(harmonic_number::<T>(q)) - (-log_z).log_principal();
    let correction = pow_over_factorial(log_z, q) * bracket;

    Series {
        value: sum + correction,
        terms,
        converged,
    }
}
