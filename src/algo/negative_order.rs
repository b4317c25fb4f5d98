//! Expansion of Li_n(z) around z = 1 for n ≤ 0.
//!
//!   Li_n(z) = (-n)! · (-log z)^(n-1) - Σ_{i≥0} B_{i-n+1}/(i-n+1) · (log z)^i / i!
//!
//! For n = 0 the i = 0 coefficient uses B_1 = +1/2, so that Li_0(z) = z/(1-z)
//! is reproduced. Valid for |log z| < 2π, including real z > 1.

use crate::algo::bernoulli::bernoulli_number;
use crate::algo::factorial::factorial;
use crate::algo::Series;
use crate::config::Budget;
use crate::machine::PolylogFloat;
use crate::scalar::Scalar;

/// Near-one series for order `n ≤ 0`.
pub(crate) fn f_n_n1<T: PolylogFloat, S: Scalar<Real = T>>(
    n: i32,
    z: S,
    budget: &Budget<T>,
) -> Series<S> {
    debug_assert!(n <= 0);
    let log_z = z.log_principal();
    let k = n.unsigned_abs();

    let mut sum = S::from_real(T::zero());
    // (log z)^i / i!
    let mut li = S::from_real(T::one());
    let mut terms = 0;
    let mut converged = false;

    for i in 0..budget.max_terms {
        let idx = i as u32 + k + 1;
        let b = if idx == 1 {
            T::from_f64(0.5)
        } else {
            bernoulli_number::<T>(idx)
        };
        let coef = b / T::from_f64(f64::from(idx));
        let part = li.scale(coef);
        sum = sum + part;
        terms = i + 1;
        if coef != T::zero() && part.modulus() <= budget.tol {
            converged = true;
            break;
        }
        li = li * log_z.scale(T::one() / T::from_usize(i + 1));
    }

    let leading = (-log_z).pow_int(n.saturating_sub(1)).scale(factorial::<T>(k));

    Series {
        value: leading - sum,
        terms,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn budget() -> Budget<f64> {
        Budget::terms(54)
    }

    #[test]
    fn li0_is_rational() {
        for x in [0.3_f64, 0.7, 1.4, 1.9] {
            let s = f_n_n1(0, x, &budget());
            assert!(s.converged);
            assert!((s.value - x / (1.0 - x)).abs() < 1e-12, "x = {x}");
        }
    }

    #[test]
    fn li_minus_one_is_rational() {
        let x = 0.6_f64;
        let s = f_n_n1(-1, x, &budget());
        assert!((s.value - x / ((1.0 - x) * (1.0 - x))).abs() < 1e-12);
    }

    #[test]
    fn li_minus_two_beyond_one() {
        // Li_{-2}(x) = x(1+x)/(1-x)^3, finite on both sides of the pole
        let x = 1.5_f64;
        let s = f_n_n1(-2, x, &budget());
        let expected = x * (1.0 + x) / (1.0 - x).powi(3);
        assert!((s.value - expected).abs() < 1e-11);
    }

    #[test]
    fn complex_reference_value() {
        // mpmath: polylog(-3, 0.4+0.6j)
        let z = Complex64::new(0.4, 0.6);
        let s = f_n_n1(-3, z, &budget());
        let expected = Complex64::new(1.4814814814814812, -5.000000000000001);
        assert!(s.converged);
        assert!((s.value - expected).norm() < 1e-12);
    }
}
