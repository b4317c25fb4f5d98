//! Overflow-safe complex helpers shared by the kernels.

use num_complex::Complex;

use crate::machine::PolylogFloat;

/// Multiply a complex number by i: (a+bi)·i = -b+ai.
#[inline]
pub(crate) fn mul_i<T: PolylogFloat>(c: Complex<T>) -> Complex<T> {
    Complex::new(-c.im, c.re)
}

/// Overflow-safe complex absolute value.
///
/// Computes `|z| = sqrt(re² + im²)` without intermediate overflow by
/// factoring out the larger component:
///   `max * sqrt(1 + (min/max)²)`
#[inline]
pub(crate) fn zabs<T: PolylogFloat>(z: Complex<T>) -> T {
    let u = z.re.abs();
    let v = z.im.abs();
    let s = u + v;
    if s == T::zero() {
        return T::zero();
    }
    if u > v {
        let q = v / u;
        u * (T::one() + q * q).sqrt()
    } else {
        let q = u / v;
        v * (T::one() + q * q).sqrt()
    }
}

/// Principal natural logarithm with a fixed side on the negative real axis.
///
/// `Complex::ln` takes the argument from `atan2(im, re)`, so a negative real
/// value carrying `-0.0` as imaginary part lands on `-π`. Values on the
/// negative real axis here always get argument `+π`, whatever the sign of
/// the zero.
#[inline]
pub(crate) fn zlog<T: PolylogFloat>(z: Complex<T>) -> Complex<T> {
    if z.im == T::zero() {
        let arg = if z.re < T::zero() { T::PI() } else { T::zero() };
        return Complex::new(z.re.abs().ln(), arg);
    }
    Complex::new(zabs(z).ln(), z.im.atan2(z.re))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    // ── zabs tests ──

    #[test]
    fn zabs_basic() {
        assert_eq!(zabs(Complex64::new(3.0, 4.0)), 5.0);
        assert_eq!(zabs(Complex64::new(0.0, 0.0)), 0.0);
        assert_eq!(zabs(Complex64::new(-2.0, 0.0)), 2.0);
    }

    #[test]
    fn zabs_no_overflow() {
        let big = 1e300;
        let z = Complex64::new(big, big);
        let expected = big * core::f64::consts::SQRT_2;
        assert!((zabs(z) - expected).abs() / expected < 1e-15);
    }

    // ── zlog tests ──

    #[test]
    fn zlog_negative_real_signed_zero() {
        let pos = zlog(Complex64::new(-2.0, 0.0));
        let neg = zlog(Complex64::new(-2.0, -0.0));
        assert_eq!(pos, neg);
        assert!((pos.re - 2.0_f64.ln()).abs() < 1e-15);
        assert!((pos.im - core::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn zlog_matches_principal_off_axis() {
        let z = Complex64::new(-1.5, 0.7);
        let a = zlog(z);
        let b = z.ln();
        assert!((a - b).norm() < 1e-15);
    }

    #[test]
    fn mul_i_rotates() {
        let z = Complex64::new(1.0, 2.0);
        assert_eq!(mul_i(z), Complex64::new(-2.0, 1.0));
    }
}
