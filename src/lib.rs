//! Pure Rust polylogarithm Li_n(z) for integer order n and real or complex z.
//!
//! The evaluation picks, from |z| and the sign of n, whichever of the
//! following converges fastest:
//!
//! - closed forms at z = ±1 and for n ∈ {0, 1, -1},
//! - the direct series Σ z^k / k^n for small |z|,
//! - expansions around z = 1 in powers of log z (zeta coefficients for
//!   n ≥ 1, Bernoulli coefficients for n ≤ 0),
//! - the inversion identity relating Li_n(z) and Li_n(1/z) for |z| ≥ 2,
//! - on the real axis, the quadratic transform for negative arguments.
//!
//! [`polylog_rec`] instead applies the duplication formula until |z| < 2.
//!
//! # Quick start
//!
//! ```
//! use num_complex::Complex64;
//! use polylog::{polylog, polylog_real};
//!
//! let pi = std::f64::consts::PI;
//! let li2 = polylog_real(2, 1.0_f64).unwrap();
//! assert!((li2 - pi * pi / 6.0).abs() < 1e-14);
//!
//! let w = polylog(3, Complex64::new(0.3, 0.4)).unwrap();
//! assert!(w.im > 0.0);
//! ```
//!
//! # Branch convention
//!
//! For n ≥ 1 the function has a cut along the real axis from 1 to +∞.
//! Arguments exactly on the cut get the value approached from below, so
//! `polylog(1, 2)` is `-iπ`. [`polylog_real`] rejects them with
//! [`Error::DomainError`].
//!
//! # Precision and status
//!
//! [`Options`] sets the number of decimal digits (the term budget
//! L = ⌈digits · log2 10⌉) and the truncation tolerance. The `_raw`
//! functions report whether every series met the tolerance within L terms:
//!
//! ```
//! use num_complex::Complex64;
//! use polylog::{polylog_raw, Accuracy, Options};
//!
//! let r = polylog_raw(2, Complex64::new(0.9, 0.3), &Options::with_digits(2)).unwrap();
//! assert_eq!(r.status, Accuracy::Reduced);
//!
//! let strict = Options::with_digits(2).require_convergence();
//! assert!(polylog_raw(2, Complex64::new(0.9, 0.3), &strict).is_err());
//! ```
//!
//! # Features
//!
//! - `std` (default): standard library float math.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`Options`] and the status enums.

#![cfg_attr(not(feature = "std"), no_std)]

pub(crate) mod algo;
pub mod config;
pub mod machine;
pub mod scalar;
pub mod types;
pub(crate) mod utils;

mod dispatch;
mod doubling;
mod real_axis;

pub use algo::bernoulli::{bernoulli_number, bernoulli_polynomial};
pub use algo::harmonic::harmonic_number;
pub use algo::zeta::zeta;
pub use config::{Convergence, Options, DEFAULT_DIGITS, DEFAULT_REC_DIGITS, MAX_DIGITS};
pub use machine::PolylogFloat;
pub use num_complex::Complex;
pub use scalar::Scalar;
pub use types::{Accuracy, Argument, Error, PolylogResult, Region};

use algo::Tally;
use dispatch::zpolylog;
use doubling::zpolylog_rec;
use real_axis::rpolylog;

// ── Single-value convenience functions ──

/// Polylogarithm Li_n(z) to 16 digits.
///
/// Real-tagged arguments (imaginary part exactly zero) with a real value are
/// evaluated on the real axis.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use polylog::polylog;
///
/// // Li_1(z) = -log(1 - z)
/// let z = Complex64::new(0.2, 0.5);
/// let w = polylog(1, z).unwrap();
/// assert!((w + (Complex64::new(1.0, 0.0) - z).ln()).norm() < 1e-15);
/// ```
pub fn polylog<T: PolylogFloat>(n: i32, z: Complex<T>) -> Result<Complex<T>, Error> {
    polylog_raw(n, z, &Options::default()).map(|r| r.value)
}

/// Polylogarithm Li_n(x) for real `x` to 16 digits.
///
/// Fails with [`Error::DomainError`] for x > 1 and n ≥ 1, where the value
/// is complex.
pub fn polylog_real<T: PolylogFloat>(n: i32, x: T) -> Result<T, Error> {
    polylog_real_raw(n, x, &Options::default()).map(|r| r.value)
}

/// Polylogarithm Li_n(z) by the duplication formula, to 10 digits.
///
/// ```
/// use num_complex::Complex64;
/// use polylog::polylog_rec;
///
/// let pi = std::f64::consts::PI;
/// let w = polylog_rec(2, Complex64::new(-1.0, 0.0)).unwrap();
/// assert!((w.re + pi * pi / 12.0).abs() < 1e-9);
/// ```
pub fn polylog_rec<T: PolylogFloat>(n: i32, z: Complex<T>) -> Result<Complex<T>, Error> {
    polylog_rec_raw(n, z, &Options::rec_default()).map(|r| r.value)
}

// ── Functions with options and status ──

/// Li_n(z) with explicit options, returning region, term count and status.
pub fn polylog_raw<T: PolylogFloat>(
    n: i32,
    z: Complex<T>,
    options: &Options,
) -> Result<PolylogResult<Complex<T>>, Error> {
    let budget = options.budget::<T>()?;
    if !z.finite() {
        return Err(Error::InvalidInput);
    }
    let mut tally = Tally::default();
    let (value, region) = zpolylog(n, z, &budget, &mut tally)?;
    finish(value, region, tally, options)
}

/// Li_n(x) for real `x` with explicit options.
pub fn polylog_real_raw<T: PolylogFloat>(
    n: i32,
    x: T,
    options: &Options,
) -> Result<PolylogResult<T>, Error> {
    let budget = options.budget::<T>()?;
    if !x.finite() {
        return Err(Error::InvalidInput);
    }
    let mut tally = Tally::default();
    let (value, region) = rpolylog(n, x, &budget, &mut tally)?;
    finish(value, region, tally, options)
}

/// Li_n(z) by the duplication formula with explicit options.
pub fn polylog_rec_raw<T: PolylogFloat>(
    n: i32,
    z: Complex<T>,
    options: &Options,
) -> Result<PolylogResult<Complex<T>>, Error> {
    let budget = options.budget::<T>()?;
    if !z.finite() {
        return Err(Error::InvalidInput);
    }
    let mut tally = Tally::default();
    let (value, region) = zpolylog_rec(n, z, &budget, &mut tally, 0)?;
    finish(value, region, tally, options)
}

/// Apply the overflow check and the convergence policy.
fn finish<V: Scalar>(
    value: V,
    region: Region,
    tally: Tally,
    options: &Options,
) -> Result<PolylogResult<V>, Error> {
    if !value.finite() {
        return Err(Error::Overflow);
    }
    let status = if tally.converged {
        Accuracy::Normal
    } else {
        match options.convergence {
            Convergence::Report => Accuracy::Reduced,
            Convergence::Require => return Err(Error::ConvergenceFailure(options.max_terms())),
        }
    };
    Ok(PolylogResult {
        value,
        region,
        terms: tally.terms,
        status,
    })
}
