//! Direct power series Li_n(z) = Σ_{k≥1} z^k / k^n.
//!
//! Converges for |z| < 1 and is used for |z| ≤ 1/2 (|x| < 1/4 on the real
//! axis) and for 1/z in the inversion identity.

use crate::algo::Series;
use crate::config::Budget;
use crate::machine::PolylogFloat;
use crate::scalar::Scalar;

/// Sum z^k / k^n for k = 1, 2, ... until a term's magnitude is at or below
/// the tolerance or `max_terms` terms have been added.
///
/// The first term is always summed before the check.
pub(crate) fn f_n_0<T: PolylogFloat, S: Scalar<Real = T>>(
    n: i32,
    z: S,
    budget: &Budget<T>,
) -> Series<S> {
    let mut sum = S::from_real(T::zero());
    let mut zk = z;
    let mut terms = 0;
    let mut converged = false;

    for k in 1..=budget.max_terms.max(1) {
        let part = zk.scale(T::one() / T::from_usize(k).powi(n));
        sum = sum + part;
        terms = k;
        if part.modulus() <= budget.tol {
            converged = true;
            break;
        }
        zk = zk * z;
    }

    Series {
        value: sum,
        terms,
        converged,
    }
}
