//! Region dispatcher for complex arguments.
//!
//! Picks a closed form, the near-zero series, the inversion identity or one
//! of the near-one expansions from |z| and the sign of n. Arguments on the
//! real axis with a real value are handed to the real-axis path.

use num_complex::Complex;
use tracing::trace;

use crate::algo::constants::{INVERSION_RADIUS, NEAR_ZERO_RADIUS};
use crate::algo::inversion::g_n;
use crate::algo::near_one::f_n_1;
use crate::algo::near_zero::f_n_0;
use crate::algo::negative_order::f_n_n1;
use crate::algo::Tally;
use crate::config::Budget;
use crate::machine::PolylogFloat;
use crate::real_axis::{has_real_value, rpolylog};
use crate::scalar::Scalar;
use crate::types::{Argument, Error, Region};
use crate::utils::zabs;

/// Closed forms for n ∈ {0, 1, -1}, shared with the real-axis path.
///
/// Returns `None` for any other order. The denominator 1 - z of the n = 0
/// and n = 1 forms is nudged by machine epsilon when it is closer to zero
/// than that.
pub(crate) fn closed_form<T: PolylogFloat, S: Scalar<Real = T>>(n: i32, z: S) -> Option<S> {
    let one = S::from_real(T::one());
    let d = one - z;
    let guarded = if d.modulus() < T::MACH_EPSILON {
        d + S::from_real(T::MACH_EPSILON)
    } else {
        d
    };
    match n {
        0 => Some(z / guarded),
        1 => Some(-guarded.log_principal()),
        -1 => Some(z / (d * d)),
        _ => None,
    }
}

/// Li_n(z) for complex `z`, together with the region used.
pub(crate) fn zpolylog<T: PolylogFloat>(
    n: i32,
    z: Complex<T>,
    budget: &Budget<T>,
    tally: &mut Tally,
) -> Result<(Complex<T>, Region), Error> {
    let zero = T::zero();

    if let Argument::Real(x) = Argument::classify(z) {
        if has_real_value(n, x) {
            let (value, region) = rpolylog(n, x, budget, tally)?;
            return Ok((Complex::new(value, zero), region));
        }
    }

    if let Some(value) = closed_form(n, z) {
        trace!(n, region = ?Region::ClosedForm, "complex dispatch");
        return Ok((value, Region::ClosedForm));
    }

    let az = zabs(z);
    let (value, region) = if az <= T::from_f64(NEAR_ZERO_RADIUS) {
        let v = tally.absorb(f_n_0(n, z, budget), "near_zero");
        (v, Region::NearZero)
    } else if az >= T::from_f64(INVERSION_RADIUS) {
        let inv = Complex::new(T::one(), zero) / z;
        let tail = tally.absorb(f_n_0(n, inv, budget), "near_zero");
        let v = if n % 2 == 0 {
            g_n(n, z) - tail
        } else {
            g_n(n, z) + tail
        };
        (v, Region::Inversion)
    } else if n > 0 {
        let v = tally.absorb(f_n_1(n, z, budget), "near_one");
        (v, Region::NearOne)
    } else {
        let v = tally.absorb(f_n_n1(n, z, budget), "negative_order");
        (v, Region::NegativeOrder)
    };

    trace!(n, modulus = ?az, region = ?region, terms = tally.terms, "complex dispatch");
    Ok((value, region))
}
