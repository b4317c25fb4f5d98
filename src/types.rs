//! Core types for polylogarithm computation.

use num_complex::Complex;
use thiserror::Error;

use crate::machine::PolylogFloat;

/// Status of the computation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accuracy {
    /// Every series used met the truncation tolerance within its term budget.
    Normal,
    /// At least one series exhausted its term budget before its last term
    /// fell below the tolerance; the value may carry a larger error than
    /// requested.
    Reduced,
}

/// Evaluation strategy selected for the outermost call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Closed form: z = ±1, or order 0, 1, -1.
    ClosedForm,
    /// Direct power series Σ z^k / k^n.
    NearZero,
    /// Expansion in powers of log z with zeta coefficients (n ≥ 1).
    NearOne,
    /// Expansion in powers of log z with Bernoulli coefficients (n ≤ 0).
    NegativeOrder,
    /// Inversion identity relating Li_n(z) and Li_n(1/z).
    Inversion,
    /// Real-axis identity Li_n(x) = 2^(1-n) Li_n(x²) - Li_n(-x) for x < 0.
    QuadraticTransform,
    /// Duplication formula applied until |z| < 2.
    Doubling,
}

/// Argument of the polylogarithm, classified once at the entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument<T: PolylogFloat> {
    /// Argument on the real axis.
    Real(T),
    /// Argument with a non-zero imaginary part.
    Complex(Complex<T>),
}

impl<T: PolylogFloat> Argument<T> {
    /// Classify `z`: an imaginary part of exactly zero (either sign) makes
    /// it real.
    #[inline]
    pub fn classify(z: Complex<T>) -> Self {
        if z.im == T::zero() {
            Argument::Real(z.re)
        } else {
            Argument::Complex(z)
        }
    }
}

/// Result of a polylogarithm evaluation, returned by `_raw` functions
/// (e.g., [`polylog_raw`](crate::polylog_raw)).
///
/// Single-value convenience functions (`polylog`, `polylog_real`, …) do not
/// expose this type; they return only the computed value and discard the
/// status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylogResult<V> {
    /// Computed function value.
    pub value: V,
    /// Strategy chosen for the outermost evaluation.
    pub region: Region,
    /// Total number of series terms summed, across all nested evaluations.
    pub terms: usize,
    /// Convergence status of the computation.
    pub status: Accuracy,
}

/// Error type for polylogarithm computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Invalid input: non-finite argument, or precision/tolerance out of range.
    #[error("invalid input: check z, digits and tolerance")]
    InvalidInput,
    /// Li_n(1) diverges for n ≤ 1.
    #[error("pole: Li_n(1) diverges for order {0}")]
    Pole(i32),
    /// The real-axis evaluation was asked for a value that is complex.
    #[error("domain error: Li_{0}(x) is complex for real x > 1; use the complex entry point")]
    DomainError(i32),
    /// The result magnitude exceeds the representable range.
    #[error("overflow: result is not finite")]
    Overflow,
    /// A series exhausted its term budget and convergence was required.
    #[error("convergence failure: series did not reach the tolerance within {0} terms")]
    ConvergenceFailure(usize),
}
