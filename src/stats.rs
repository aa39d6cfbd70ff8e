//! Posterior summary statistics over a recorded chain.
//!
//! Burn-in handling lives here, on the consumer side: the sampler always
//! records every step, and the caller chooses how much prefix to discard.

use ndarray::Axis;

use crate::chain::Chain;

/// Posterior mean and sample standard deviation (ddof = 1) of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSummary {
    pub mean: f64,
    pub std: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorSummary {
    pub a: ParamSummary,
    pub b: ParamSummary,
    /// Number of samples the summary was computed from.
    pub n_kept: usize,
}

/// Summarizes the posterior over `(a, b)` after discarding the first
/// `burn_in` rows.
///
/// # Panics
///
/// Panics if `burn_in` leaves fewer than two rows; a spread over fewer
/// samples is undefined.
pub fn summarize(chain: &Chain, burn_in: usize) -> PosteriorSummary {
    assert!(
        burn_in + 2 <= chain.len(),
        "burn_in {} leaves fewer than two of {} rows",
        burn_in,
        chain.len()
    );
    let (positions, _) = chain.discard(burn_in);
    let mean = positions
        .mean_axis(Axis(0))
        .expect("Expected mean over a non-empty axis to succeed.");
    let std = positions.std_axis(Axis(0), 1.0);
    PosteriorSummary {
        a: ParamSummary {
            mean: mean[0],
            std: std[0],
        },
        b: ParamSummary {
            mean: mean[1],
            std: std[1],
        },
        n_kept: positions.nrows(),
    }
}

/// Fraction of recorded transitions that moved the chain.
///
/// This undercounts acceptance when an accepted proposal happens to equal the
/// current position exactly, which for a continuous target is a measure-zero
/// event.
pub fn acceptance_rate(chain: &Chain) -> f64 {
    if chain.len() < 2 {
        return 0.0;
    }
    let positions = chain.positions();
    let moved = (1..chain.len())
        .filter(|&i| {
            positions[[i, 0]] != positions[[i - 1, 0]] || positions[[i, 1]] != positions[[i - 1, 1]]
        })
        .count();
    moved as f64 / (chain.len() - 1) as f64
}
