//! Machine constants and the `PolylogFloat` trait.

use num_traits::{Float, FloatConst};

use crate::scalar::Scalar;

/// Floating-point trait for polylogarithm computation.
///
/// Implemented for `f64` and `f32`. Provides the machine constants used by
/// the series kernels and the default truncation tolerance. Every
/// `PolylogFloat` is also the real instance of [`Scalar`], so the kernels
/// run unchanged on the real axis.
pub trait PolylogFloat: Float + FloatConst + Scalar<Real = Self> + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Absolute truncation tolerance used when the caller does not set one.
    const TRUNCATION_TOL: f64;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it truncates via `as f32`.
    fn from_f64(x: f64) -> Self;

    /// Conversion of a small non-negative integer (term index, order).
    #[inline]
    fn from_usize(k: usize) -> Self {
        Self::from_f64(k as f64)
    }
}

impl PolylogFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const TRUNCATION_TOL: f64 = 1e-16;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
}

impl PolylogFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const TRUNCATION_TOL: f64 = 1e-16;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_matches_core() {
        assert_eq!(<f64 as PolylogFloat>::MACH_EPSILON, f64::EPSILON);
        assert_eq!(<f32 as PolylogFloat>::MACH_EPSILON, f32::EPSILON);
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(<f64 as PolylogFloat>::from_usize(54), 54.0);
        assert_eq!(<f32 as PolylogFloat>::from_usize(7), 7.0_f32);
    }
}
