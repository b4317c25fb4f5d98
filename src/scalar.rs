//! Real-or-complex scalar abstraction used by the series kernels.
//!
//! The kernels are written once over [`Scalar`] and instantiated for the
//! real-axis path (`f64`, `f32`) and the complex path (`Complex<f64>`,
//! `Complex<f32>`). Method names are chosen so they never collide with
//! [`num_traits::Float`] on the real instances.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex;
use num_traits::Float;

use crate::machine::PolylogFloat;
use crate::utils::{zabs, zlog};

/// Field operations the series kernels need from their argument type.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Underlying real type.
    type Real: PolylogFloat;

    /// Embed a real number.
    fn from_real(x: Self::Real) -> Self;

    /// Multiply by a real factor.
    fn scale(self, k: Self::Real) -> Self;

    /// Modulus |self|.
    fn modulus(self) -> Self::Real;

    /// Natural logarithm on the principal branch.
    ///
    /// For complex values the negative real axis maps to argument `+π`.
    /// Real values must be positive.
    fn log_principal(self) -> Self;

    /// Signed integer power.
    fn pow_int(self, n: i32) -> Self;

    /// `true` when no component is infinite or NaN.
    fn finite(self) -> bool;
}

macro_rules! impl_real_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            type Real = $t;

            #[inline]
            fn from_real(x: $t) -> $t {
                x
            }
            #[inline]
            fn scale(self, k: $t) -> $t {
                self * k
            }
            #[inline]
            fn modulus(self) -> $t {
                Float::abs(self)
            }
            #[inline]
            fn log_principal(self) -> $t {
                Float::ln(self)
            }
            #[inline]
            fn pow_int(self, n: i32) -> $t {
                Float::powi(self, n)
            }
            #[inline]
            fn finite(self) -> bool {
                Float::is_finite(self)
            }
        }
    };
}

impl_real_scalar!(f64);
impl_real_scalar!(f32);

impl<T: PolylogFloat> Scalar for Complex<T> {
    type Real = T;

    #[inline]
    fn from_real(x: T) -> Self {
        Complex::new(x, T::zero())
    }
    #[inline]
    fn scale(self, k: T) -> Self {
        Complex::new(self.re * k, self.im * k)
    }
    #[inline]
    fn modulus(self) -> T {
        zabs(self)
    }
    #[inline]
    fn log_principal(self) -> Self {
        zlog(self)
    }
    #[inline]
    fn pow_int(self, n: i32) -> Self {
        Complex::powi(&self, n)
    }
    #[inline]
    fn finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}
