//! Synthetic observation sets for the four demonstration models.
//!
//! Uncertainties follow the heteroscedastic recipe
//! `dy = |instrument_error + trend_coeff * x + N(0, noise_sigma)|` and the
//! observed values are the model curve perturbed by `N(0, dy_i)` per point.
//! All randomness comes from a caller-supplied [`VariateGenerator`]; nothing
//! here seeds or touches global state.

use ndarray::Array1;

use crate::likelihood::{Model, Observations};
use crate::rng::VariateGenerator;

pub fn linear(x: f64, a: f64, b: f64) -> f64 {
    a * x + b
}

/// `a * ln(b * x)`; non-finite for `b * x <= 0`.
pub fn logarithmic(x: f64, a: f64, b: f64) -> f64 {
    a * (b * x).ln()
}

pub fn quadratic(x: f64, a: f64, b: f64) -> f64 {
    a * x + b * x * x
}

/// `a / x + b`; non-finite at `x = 0`.
pub fn inverse(x: f64, a: f64, b: f64) -> f64 {
    a / x + b
}

/// Parameters of the heteroscedastic uncertainty model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSpec {
    /// Baseline measurement uncertainty.
    pub instrument_error: f64,
    /// Linear growth of the uncertainty with `x`.
    pub trend_coeff: f64,
    /// Standard deviation of the random jitter on the uncertainty itself.
    pub noise_sigma: f64,
}

/// Generates observations of `model` at `x` with true parameters
/// `(true_a, true_b)` and noise per `spec`.
///
/// The absolute value keeps every `dy_i` strictly positive, as the likelihood
/// layer requires.
pub fn generate_observations<M: Model>(
    model: &M,
    x: &Array1<f64>,
    true_a: f64,
    true_b: f64,
    spec: &NoiseSpec,
    gen: &mut VariateGenerator,
) -> Observations {
    let dy: Array1<f64> = x
        .iter()
        .map(|&xi| {
            (spec.instrument_error + spec.trend_coeff * xi + gen.normal(0.0, spec.noise_sigma))
                .abs()
        })
        .collect();
    let y: Array1<f64> = x
        .iter()
        .zip(dy.iter())
        .map(|(&xi, &dyi)| model.evaluate(xi, true_a, true_b) + gen.normal(0.0, dyi))
        .collect();
    Observations::new(x.clone(), y, dy).expect("Expected generated columns to match in length.")
}
