//! End-to-end check that the momentum sampler recovers the parameters of a
//! noisy straight line.

use ndarray::Array1;
use param_insight::likelihood::Observations;
use param_insight::momentum::{MomentumConfig, MomentumSampler};
use param_insight::rng::VariateGenerator;
use param_insight::stats::summarize;

fn linear(x: f64, a: f64, b: f64) -> f64 {
    a * x + b
}

/// Observations of y = 2x + 1 at x = 0, 0.5, ..., 10 with dy = 0.1 and
/// Gaussian noise of the same width added at generation time.
fn noisy_line(seed: u64) -> Observations {
    let mut gen = VariateGenerator::from_seed(seed);
    let x = Array1::linspace(0.0, 10.0, 21);
    let dy = Array1::from_elem(21, 0.1);
    let y: Array1<f64> = x.iter().map(|&xi| gen.normal(2.0 * xi + 1.0, 0.1)).collect();
    Observations::new(x, y, dy).unwrap()
}

#[test]
fn posterior_mean_recovers_the_true_line() {
    const TRUE_A: f64 = 2.0;
    const TRUE_B: f64 = 1.0;
    const BURN_IN: usize = 500;

    let obs = noisy_line(42);
    let config = MomentumConfig {
        n_steps: 2000,
        scale: 0.05,
        rho: 0.9,
    };
    let mut sampler = MomentumSampler::new(obs, linear, (0.0, 0.0), config)
        .unwrap()
        .set_seed(1234);
    let chain = sampler.run();
    assert_eq!(chain.len(), 2000);
    assert!(chain.log_likelihoods().iter().all(|ll| !ll.is_nan()));

    let summary = summarize(&chain, BURN_IN);
    let diff_a = (summary.a.mean - TRUE_A).abs();
    let diff_b = (summary.b.mean - TRUE_B).abs();

    // Three posterior standard deviations, with a floor in case the kept
    // suffix collapses to a handful of distinct states.
    assert!(
        diff_a < 3.0 * summary.a.std.max(0.05),
        "a estimate {} too far from {} (std {})",
        summary.a.mean,
        TRUE_A,
        summary.a.std
    );
    assert!(
        diff_b < 3.0 * summary.b.std.max(0.05),
        "b estimate {} too far from {} (std {})",
        summary.b.mean,
        TRUE_B,
        summary.b.std
    );
}

#[test]
fn ensemble_of_chains_agrees_on_the_posterior() {
    use param_insight::momentum::sample_chains;

    let obs = noisy_line(42);
    let config = MomentumConfig {
        n_steps: 2000,
        scale: 0.05,
        rho: 0.9,
    };
    let chains = sample_chains(&obs, &linear, (0.0, 0.0), config, 4, 99).unwrap();
    assert_eq!(chains.len(), 4);

    for chain in &chains {
        let summary = summarize(chain, 500);
        assert!(
            (summary.a.mean - 2.0).abs() < 0.3,
            "chain wandered to a = {}",
            summary.a.mean
        );
        assert!(
            (summary.b.mean - 1.0).abs() < 0.6,
            "chain wandered to b = {}",
            summary.b.mean
        );
    }
}
