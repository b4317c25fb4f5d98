//! Real-axis path: Li_n(x) for real x with a real value.
//!
//! x = ±1 and the orders 0, 1, -1 have closed forms. Small |x| uses the
//! direct series, negative x the quadratic transform
//!   Li_n(x) = 2^(1-n) Li_n(x²) - Li_n(-x)
//! or, below -1, the inversion identity. For n ≤ 0 the transform cancels
//! badly near -1, so (-1, -1/2) sums the near-one series at log x = ln|x| + iπ.
//! The rest of (0, 1) uses the near-one expansions. Beyond 1 only
//! non-positive orders stay real.

use num_complex::Complex;
use tracing::trace;

use crate::algo::constants::{
    INVERSION_RADIUS, QUADRATIC_TRANSFORM_LIMIT, REAL_NEAR_ZERO_RADIUS,
};
use crate::algo::inversion::g_n;
use crate::algo::near_one::f_n_1;
use crate::algo::near_zero::f_n_0;
use crate::algo::negative_order::f_n_n1;
use crate::algo::zeta::zeta;
use crate::algo::Tally;
use crate::config::Budget;
use crate::dispatch::closed_form;
use crate::machine::PolylogFloat;
use crate::types::{Error, Region};

/// `true` when Li_n(x) is real, i.e. unless x > 1 and n ≥ 1.
#[inline]
pub(crate) fn has_real_value<T: PolylogFloat>(n: i32, x: T) -> bool {
    !(x > T::one() && n >= 1)
}

/// Li_n(x) for real `x`, together with the region used.
pub(crate) fn rpolylog<T: PolylogFloat>(
    n: i32,
    x: T,
    budget: &Budget<T>,
    tally: &mut Tally,
) -> Result<(T, Region), Error> {
    let zero = T::zero();
    let one = T::one();

    if x == one {
        if n <= 1 {
            return Err(Error::Pole(n));
        }
        return Ok((zeta(n), Region::ClosedForm));
    }
    if x == -one {
        let v = if n == 1 {
            -T::LN_2()
        } else if n < 0 && n % 2 == 0 {
            // eta vanishes at the negative even integers
            zero
        } else {
            -(one - T::from_f64(2.0).powi(1i32.saturating_sub(n))) * zeta::<T>(n)
        };
        return Ok((v, Region::ClosedForm));
    }
    if !has_real_value(n, x) {
        return Err(Error::DomainError(n));
    }
    if let Some(v) = closed_form(n, x) {
        return Ok((v, Region::ClosedForm));
    }

    let (value, region) = if x.abs() < T::from_f64(REAL_NEAR_ZERO_RADIUS) {
        let v = tally.absorb(f_n_0(n, x, budget), "near_zero");
        (v, Region::NearZero)
    } else if x < -one {
        let (tail, _) = rpolylog(n, one / x, budget, tally)?;
        let g = g_n(n, Complex::new(x, zero)).re;
        let v = if n % 2 == 0 { g - tail } else { g + tail };
        (v, Region::Inversion)
    } else if x < -T::from_f64(QUADRATIC_TRANSFORM_LIMIT) && n <= 0 {
        let v = tally.absorb(f_n_n1(n, Complex::new(x, zero), budget), "negative_order");
        (v.re, Region::NegativeOrder)
    } else if x < zero {
        let (square, _) = rpolylog(n, x * x, budget, tally)?;
        let (mirror, _) = rpolylog(n, -x, budget, tally)?;
        let v = T::from_f64(2.0).powi(1i32.saturating_sub(n)) * square - mirror;
        (v, Region::QuadraticTransform)
    } else if x < one {
        if n > 0 {
            (tally.absorb(f_n_1(n, x, budget), "near_one"), Region::NearOne)
        } else {
            (
                tally.absorb(f_n_n1(n, x, budget), "negative_order"),
                Region::NegativeOrder,
            )
        }
    } else if x < T::from_f64(INVERSION_RADIUS) {
        (
            tally.absorb(f_n_n1(n, x, budget), "negative_order"),
            Region::NegativeOrder,
        )
    } else {
        // n < 0 here, so g_n vanishes and only the reflected series remains
        let tail = tally.absorb(f_n_0(n, one / x, budget), "near_zero");
        let g = g_n(n, Complex::new(x, zero)).re;
        let v = if n % 2 == 0 { g - tail } else { g + tail };
        (v, Region::Inversion)
    };

    trace!(n, x = ?x, region = ?region, "real dispatch");
    Ok((value, region))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(n: i32, x: f64) -> Result<(f64, Region), Error> {
        let mut tally = Tally::default();
        rpolylog(n, x, &Budget::terms(54), &mut tally)
    }

    fn value(n: i32, x: f64) -> f64 {
        eval(n, x).unwrap().0
    }

    #[test]
    fn unit_arguments() {
        let pi = core::f64::consts::PI;
        assert!((value(2, 1.0) - pi * pi / 6.0).abs() < 1e-15);
        assert!((value(2, -1.0) + pi * pi / 12.0).abs() < 1e-15);
        assert!((value(1, -1.0) + core::f64::consts::LN_2).abs() < 1e-15);
        assert!((value(0, -1.0) + 0.5).abs() < 1e-15);
        assert!((value(-1, -1.0) + 0.25).abs() < 1e-15);
    }

    #[test]
    fn poles_at_one() {
        for n in [1, 0, -1, -4] {
            assert_eq!(eval(n, 1.0), Err(Error::Pole(n)));
        }
    }

    #[test]
    fn complex_valued_orders_are_rejected() {
        assert_eq!(eval(2, 1.5), Err(Error::DomainError(2)));
        assert_eq!(eval(1, 3.0), Err(Error::DomainError(1)));
    }

    #[test]
    fn region_selection() {
        assert_eq!(eval(2, 0.1).unwrap().1, Region::NearZero);
        assert_eq!(eval(2, 0.7).unwrap().1, Region::NearOne);
        assert_eq!(eval(-2, 0.7).unwrap().1, Region::NegativeOrder);
        assert_eq!(eval(3, -0.4).unwrap().1, Region::QuadraticTransform);
        assert_eq!(eval(3, -0.9).unwrap().1, Region::QuadraticTransform);
        assert_eq!(eval(-4, -0.4).unwrap().1, Region::QuadraticTransform);
        assert_eq!(eval(-4, -0.9).unwrap().1, Region::NegativeOrder);
        assert_eq!(eval(3, -5.0).unwrap().1, Region::Inversion);
        assert_eq!(eval(-3, 1.5).unwrap().1, Region::NegativeOrder);
        assert_eq!(eval(-3, 3.5).unwrap().1, Region::Inversion);
        assert_eq!(eval(0, 7.0).unwrap().1, Region::ClosedForm);
    }

    #[test]
    fn reference_values() {
        // mpmath: polylog(n, x)
        let cases = [
            (2, 0.7, 0.8893776242860387),
            (3, -0.4, -0.38203710293931),
            (3, -5.0, -3.5375114376186075),
            (2, -2.5, -1.6988958419950142),
            (5, 0.95, 0.9829575989510685),
        ];
        for (n, x, expected) in cases {
            assert!((value(n, x) - expected).abs() < 1e-14, "n = {n}, x = {x}");
        }
    }

    #[test]
    fn negative_orders_avoid_cancellation_near_minus_one() {
        // mpmath: polylog(-5, -0.7)
        let expected: f64 = -0.1874037107879422;
        let mut tally = Tally::default();
        let (v, region) = rpolylog(-5, -0.7, &Budget::terms(80), &mut tally).unwrap();
        assert_eq!(region, Region::NegativeOrder);
        assert!(tally.converged);
        assert!((v - expected).abs() < 1e-13);
    }

    #[test]
    fn extreme_orders_saturate() {
        assert_eq!(value(i32::MIN, -1.0), 0.0);
        assert!(value(i32::MIN + 1, -1.0).is_infinite());
    }

    #[test]
    fn negative_orders_are_rational() {
        // Li_{-2}(x) = x(1+x)/(1-x)^3
        for x in [-3.0f64, -0.8, -0.3, 0.6, 1.5, 4.0] {
            let expected = x * (1.0 + x) / (1.0 - x).powi(3);
            let got = value(-2, x);
            assert!((got - expected).abs() < 1e-9 * expected.abs().max(1.0), "x = {x}");
        }
    }
}
