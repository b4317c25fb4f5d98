//! Evaluation options: requested precision, truncation tolerance and the
//! convergence policy.
//!
//! Options travel by reference into every kernel. There is no global
//! state, so concurrent evaluations with different options are independent.

use num_traits::Float;

use crate::machine::PolylogFloat;
use crate::types::Error;

/// Default number of decimal digits for `polylog` and `polylog_real`.
pub const DEFAULT_DIGITS: u32 = 16;

/// Default number of decimal digits for `polylog_rec`.
pub const DEFAULT_REC_DIGITS: u32 = 10;

/// Largest accepted number of decimal digits.
///
/// Beyond this the Bernoulli coefficients of the long expansions leave the
/// f64 range.
pub const MAX_DIGITS: u32 = 64;

/// What to do when a series exhausts its term budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convergence {
    /// Return the truncated value and mark it [`Accuracy::Reduced`](crate::Accuracy::Reduced).
    #[default]
    Report,
    /// Fail with [`Error::ConvergenceFailure`].
    Require,
}

/// Options for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Requested decimal digits; sets the term budget
    /// `L = ceil(digits · log2(10))`.
    pub digits: u32,
    /// Absolute truncation tolerance on the magnitude of a series term.
    pub tolerance: f64,
    /// Policy for a series that does not converge within `L` terms.
    pub convergence: Convergence,
}

impl Default for Options {
    fn default() -> Self {
        Self::with_digits(DEFAULT_DIGITS)
    }
}

impl Options {
    /// Options for the given number of decimal digits, default tolerance
    /// (1e-16) and [`Convergence::Report`].
    pub const fn with_digits(digits: u32) -> Self {
        Self {
            digits,
            tolerance: <f64 as PolylogFloat>::TRUNCATION_TOL,
            convergence: Convergence::Report,
        }
    }

    /// Default options of the doubling recursion (10 digits).
    pub const fn rec_default() -> Self {
        Self::with_digits(DEFAULT_REC_DIGITS)
    }

    /// Replace the truncation tolerance.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fail instead of returning a truncated value.
    #[must_use]
    pub fn require_convergence(mut self) -> Self {
        self.convergence = Convergence::Require;
        self
    }

    /// Term budget `L = ceil(digits · log2(10))`.
    pub fn max_terms(&self) -> usize {
        Float::ceil(f64::from(self.digits) * core::f64::consts::LOG2_10) as usize
    }

    /// Validate and convert into the per-kernel budget.
    pub(crate) fn budget<T: PolylogFloat>(&self) -> Result<Budget<T>, Error> {
        if self.digits == 0 || self.digits > MAX_DIGITS {
            return Err(Error::InvalidInput);
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidInput);
        }
        Ok(Budget {
            max_terms: self.max_terms(),
            tol: T::from_f64(self.tolerance),
        })
    }
}

/// Term budget and tolerance handed to each series kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Budget<T> {
    /// Maximum number of terms a kernel may sum.
    pub max_terms: usize,
    /// A term whose magnitude is at or below this ends the series.
    pub tol: T,
}

#[cfg(test)]
impl<T: PolylogFloat> Budget<T> {
    /// Budget with an explicit term limit and the default tolerance.
    pub(crate) fn terms(max_terms: usize) -> Self {
        Budget {
            max_terms,
            tol: T::from_f64(<f64 as PolylogFloat>::TRUNCATION_TOL),
        }
    }
}
