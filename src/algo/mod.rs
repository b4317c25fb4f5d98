//! Internal algorithm modules for polylogarithm computation.
//!
//! The series kernels are generic over [`Scalar`](crate::scalar::Scalar)
//! so the real-axis path and the complex path share one implementation.
//! All kernels are `pub(crate)`; the building blocks `zeta`,
//! `bernoulli_number`, `bernoulli_polynomial` and `harmonic_number` are
//! re-exported from the crate root.
//!
//! # Return value convention
//!
//! Series kernels return a [`Series`]: the partial sum, the number of terms
//! summed and whether the last non-trivial term met the tolerance. The
//! dispatcher folds these into a [`Tally`] that becomes the
//! `terms`/`status` of the public result.
//!
//! # Termination
//!
//! A kernel stops after `max_terms` terms or as soon as a term with a
//! non-zero coefficient has magnitude at or below `tol`. Terms whose
//! coefficient is exactly zero (ζ at negative even integers, odd Bernoulli
//! numbers) are added but never end the series.

pub(crate) mod constants;

// Collaborator functions
pub(crate) mod bernoulli;
pub(crate) mod factorial;
pub(crate) mod harmonic;
pub(crate) mod zeta;

// Series kernels
pub(crate) mod near_one;
pub(crate) mod near_zero;
pub(crate) mod negative_order;

// Functional equation
pub(crate) mod inversion;

use tracing::warn;

/// Partial sum produced by a series kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Series<S> {
    /// Value of the truncated series (including any closed-form part).
    pub value: S,
    /// Number of terms summed.
    pub terms: usize,
    /// Whether a term met the tolerance before the budget ran out.
    pub converged: bool,
}

/// Running account of the series evaluated for one public call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    pub terms: usize,
    pub converged: bool,
}

impl Default for Tally {
    fn default() -> Self {
        Tally {
            terms: 0,
            converged: true,
        }
    }
}

impl Tally {
    /// Record a kernel's work and return its value.
    pub(crate) fn absorb<S>(&mut self, series: Series<S>, kernel: &'static str) -> S {
        self.terms += series.terms;
        if !series.converged {
            warn!(kernel, terms = series.terms, "series exhausted its term budget");
            self.converged = false;
        }
        series.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_accumulates() {
        let mut tally = Tally::default();
        let a = tally.absorb(
            Series {
                value: 1.0_f64,
                terms: 10,
                converged: true,
            },
            "a",
        );
        assert_eq!(a, 1.0);
        assert!(tally.converged);
        tally.absorb(
            Series {
                value: 2.0_f64,
                terms: 54,
                converged: false,
            },
            "b",
        );
        assert_eq!(tally.terms, 64);
        assert!(!tally.converged);
    }
}
