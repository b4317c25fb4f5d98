//! Duplication formula for |z| ≥ 2:
//!   Li_n(z) = 2^(n-1) · (Li_n(√z) + Li_n(-√z))
//! applied until the argument is inside |z| < 2.

use num_complex::Complex;
use num_traits::Float;
use tracing::debug;

use crate::algo::constants::INVERSION_RADIUS;
use crate::algo::Tally;
use crate::config::Budget;
use crate::dispatch::zpolylog;
use crate::machine::PolylogFloat;
use crate::types::{Error, Region};
use crate::utils::zabs;

/// Li_n(z) by repeated square roots. `depth` is the number of halvings
/// already applied and only feeds the log.
///
/// Each halving at least halves log|z|, so the depth is bounded by about
/// log2(log2(max float)).
pub(crate) fn zpolylog_rec<T: PolylogFloat>(
    n: i32,
    z: Complex<T>,
    budget: &Budget<T>,
    tally: &mut Tally,
    depth: u32,
) -> Result<(Complex<T>, Region), Error> {
    let az = zabs(z);
    if az < T::from_f64(INVERSION_RADIUS) {
        return zpolylog(n, z, budget, tally);
    }
    debug!(n, depth, modulus = ?az, "doubling");

    let root = z.sqrt();
    let (plus, _) = zpolylog_rec(n, root, budget, tally, depth + 1)?;
    let (minus, _) = zpolylog_rec(n, -root, budget, tally, depth + 1)?;
    let factor = Float::powi(T::from_f64(2.0), n.saturating_sub(1));
    Ok(((plus + minus) * factor, Region::Doubling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn eval(n: i32, z: Complex64) -> (Complex64, Region) {
        let mut tally = Tally::default();
        zpolylog_rec(n, z, &Budget::terms(34), &mut tally, 0).unwrap()
    }

    #[test]
    fn small_argument_defers_to_dispatcher() {
        let (v, region) = eval(2, Complex64::new(0.5, 0.0));
        assert_eq!(region, Region::NearOne);
        let pi = core::f64::consts::PI;
        let ln2 = core::f64::consts::LN_2;
        assert!((v.re - (pi * pi / 12.0 - ln2 * ln2 / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn large_argument_uses_duplication() {
        // mpmath: polylog(3, 3+4j)
        let z = Complex64::new(3.0, 4.0);
        let (v, region) = eval(3, z);
        assert_eq!(region, Region::Doubling);
        let expected = Complex64::new(0.7216918916865138, 4.535830046833907);
        assert!((v - expected).norm() < 1e-9 * expected.norm());
    }

    #[test]
    fn real_beyond_one_matches_cut_from_below() {
        // mpmath: polylog(2, 3)
        let (v, _) = eval(2, Complex64::new(3.0, 0.0));
        let expected = Complex64::new(2.3201804233130985, -3.4513922952232026);
        assert!((v - expected).norm() < 1e-9);
    }

    #[test]
    fn huge_argument_terminates() {
        let mut tally = Tally::default();
        let z = Complex64::new(1e300, -1e300);
        let (v, _) = zpolylog_rec(2, z, &Budget::terms(34), &mut tally, 0).unwrap();
        assert!(v.re.is_finite() && v.im.is_finite());
    }
}
