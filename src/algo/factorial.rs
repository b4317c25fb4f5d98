//! Factorials and scaled powers x^k / k!.

use crate::machine::PolylogFloat;
use crate::scalar::Scalar;

/// k! in the float type. Overflows to infinity for k > 170 (f64).
#[inline]
pub(crate) fn factorial<T: PolylogFloat>(k: u32) -> T {
    let mut acc = T::one();
    for j in 2..=k {
        acc = acc * T::from_f64(f64::from(j));
        if acc.is_infinite() {
            break;
        }
    }
    acc
}

/// x^k / k!, accumulated as a product of x/j so that neither the power nor
/// the factorial has to be representable on its own.
#[inline]
pub(crate) fn pow_over_factorial<T: PolylogFloat, S: Scalar<Real = T>>(x: S, k: u32) -> S {
    (1..=k).fold(S::from_real(T::one()), |acc, j| {
        acc * x.scale(T::one() / T::from_f64(f64::from(j)))
    })
}
