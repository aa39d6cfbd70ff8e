/*!
# Momentum Metropolis-Hastings Sampler

A Metropolis-Hastings random walk over a two-parameter space `(a, b)`,
augmented with a persistent velocity term. Each step decays the velocity by
`rho`, refreshes it with Gaussian noise of scale `scale`, and proposes the
current position displaced by the updated velocity. The acceptance test is the
Metropolis criterion evaluated in log space.

On rejection the velocity is *negated*. Because the velocity carries memory
across steps, the proposal kernel is not symmetric in the naive sense; the
reversal is what makes the overall transition kernel time-reversible, so the
chain's stationary distribution equals the target posterior. Position and
log-likelihood are left untouched by a rejection.

# Examples

```rust
use param_insight::likelihood::Observations;
use param_insight::momentum::{MomentumConfig, MomentumSampler};

let obs = Observations::new(
    vec![0.0, 1.0, 2.0],
    vec![1.1, 2.9, 5.2],
    vec![0.2, 0.2, 0.2],
).unwrap();

let config = MomentumConfig {
    n_steps: 1000,
    scale: 0.1,
    rho: 0.9,
};
let model = |x: f64, a: f64, b: f64| a * x + b;
let mut sampler = MomentumSampler::new(obs, model, (0.0, 0.0), config)
    .unwrap()
    .set_seed(42);

let chain = sampler.run();
assert_eq!(chain.len(), 1000);
```
*/

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rand::{thread_rng, Rng};
use rayon::prelude::*;

use crate::chain::Chain;
use crate::error::SamplerError;
use crate::likelihood::{log_likelihood, Model, Observations};
use crate::rng::VariateGenerator;

/// Hyperparameters of the momentum sampler, validated at construction.
///
/// `scale = 0` is admitted: it degenerates the walk into a chain that stays at
/// the initial point forever, which is useful as a deterministic fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumConfig {
    /// Number of chain records to produce, including the initial point.
    pub n_steps: usize,
    /// Standard deviation of the per-step velocity innovations.
    pub scale: f64,
    /// Velocity persistence factor, strictly inside `(0, 1)`.
    pub rho: f64,
}

impl MomentumConfig {
    fn validate(&self) -> Result<(), SamplerError> {
        if self.n_steps == 0 {
            return Err(SamplerError::NoSteps);
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(SamplerError::BadScale(self.scale));
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(SamplerError::BadRho(self.rho));
        }
        Ok(())
    }
}

/// The momentum Metropolis-Hastings sampler.
///
/// Owns the observation set, the model, and the complete sampler state:
/// position `(a, b)`, velocity `(v_a, v_b)` and the current log-likelihood.
/// State is advanced strictly one step at a time; only the recorded [`Chain`]
/// persists beyond a run.
#[derive(Debug, Clone)]
pub struct MomentumSampler<M> {
    observations: Observations,
    model: M,
    config: MomentumConfig,
    position: (f64, f64),
    velocity: (f64, f64),
    log_like: f64,
    seed: u64,
    rng: VariateGenerator,
}

impl<M: Model> MomentumSampler<M> {
    const UPDATE_INTERVAL: Duration = Duration::from_millis(500);

    /// Creates a sampler at `initial = (a_init, b_init)` with zero velocity.
    ///
    /// The log-likelihood of the initial point is computed here, before any
    /// step. The seed defaults to a fresh random value; use [`set_seed`] for
    /// reproducible runs.
    ///
    /// # Errors
    ///
    /// Fails fast with a [`SamplerError`] if `config` is invalid. No step
    /// executes in that case.
    ///
    /// [`set_seed`]: MomentumSampler::set_seed
    pub fn new(
        observations: Observations,
        model: M,
        initial: (f64, f64),
        config: MomentumConfig,
    ) -> Result<Self, SamplerError> {
        config.validate()?;
        let log_like = log_likelihood(initial.0, initial.1, &observations, &model);
        let seed = thread_rng().gen::<u64>();
        Ok(Self {
            observations,
            model,
            config,
            position: initial,
            velocity: (0.0, 0.0),
            log_like,
            seed,
            rng: VariateGenerator::from_seed(seed),
        })
    }

    /// Reseeds the internal variate generator. Two samplers with identical
    /// seed, data and hyperparameters produce identical chains.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.rng = VariateGenerator::from_seed(seed);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    /// Current position `(a, b)`.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Current velocity `(v_a, v_b)`.
    pub fn velocity(&self) -> (f64, f64) {
        self.velocity
    }

    /// Log-likelihood of the current position.
    pub fn log_likelihood(&self) -> f64 {
        self.log_like
    }

    /// Performs one momentum Metropolis-Hastings transition.
    ///
    /// Returns `true` if the proposal was accepted. On rejection the position
    /// and log-likelihood are unchanged and the velocity that produced the
    /// rejected proposal is negated.
    pub fn step(&mut self) -> bool {
        let MomentumConfig { scale, rho, .. } = self.config;

        let v_a = rho * self.velocity.0 + self.rng.normal(0.0, scale);
        let v_b = rho * self.velocity.1 + self.rng.normal(0.0, scale);
        let a_prop = self.position.0 + v_a;
        let b_prop = self.position.1 + v_b;

        let log_like_prop = log_likelihood(a_prop, b_prop, &self.observations, &self.model);

        // Log-space Metropolis test. A NaN difference (current and proposed
        // both at -infinity) compares false and counts as a rejection.
        let u = self.rng.unit_uniform();
        if u.ln() < log_like_prop - self.log_like {
            self.position = (a_prop, b_prop);
            self.velocity = (v_a, v_b);
            self.log_like = log_like_prop;
            true
        } else {
            self.velocity = (-v_a, -v_b);
            false
        }
    }

    /// Runs the sampler for the configured number of steps.
    ///
    /// Row 0 of the returned chain is the initial point; each subsequent row
    /// records the committed state after one transition, whether the proposal
    /// was accepted or not. The chain length is exactly `n_steps`.
    pub fn run(&mut self) -> Chain {
        let mut chain = Chain::with_len(self.config.n_steps);
        chain.record(0, self.position.0, self.position.1, self.log_like);
        for idx in 1..self.config.n_steps {
            self.step();
            chain.record(idx, self.position.0, self.position.1, self.log_like);
        }
        chain
    }

    /// Like [`run`], but observes `cancel` between steps.
    ///
    /// When the flag is raised the partially filled chain is returned,
    /// truncated to the rows committed so far; those rows are valid samples.
    ///
    /// [`run`]: MomentumSampler::run
    pub fn run_until(&mut self, cancel: &AtomicBool) -> Chain {
        let mut chain = Chain::with_len(self.config.n_steps);
        chain.record(0, self.position.0, self.position.1, self.log_like);
        for idx in 1..self.config.n_steps {
            if cancel.load(Ordering::Relaxed) {
                chain.truncate(idx);
                return chain;
            }
            self.step();
            chain.record(idx, self.position.0, self.position.1, self.log_like);
        }
        chain
    }

    /// Like [`run`], but drives a progress bar showing the running acceptance
    /// rate. The produced chain is identical to what [`run`] yields for the
    /// same seed.
    ///
    /// [`run`]: MomentumSampler::run
    pub fn run_progress(&mut self) -> Chain {
        let n_steps = self.config.n_steps;
        let pb = ProgressBar::new(n_steps as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:8} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        pb.set_prefix("Momentum");

        let mut chain = Chain::with_len(n_steps);
        chain.record(0, self.position.0, self.position.1, self.log_like);

        let mut accept_count = 0_usize;
        let mut last_update = Instant::now();
        for idx in 1..n_steps {
            if self.step() {
                accept_count += 1;
            }
            chain.record(idx, self.position.0, self.position.1, self.log_like);

            if last_update.elapsed() >= Self::UPDATE_INTERVAL || idx + 1 == n_steps {
                let accept_rate = accept_count as f64 / idx as f64;
                pb.set_position(idx as u64 + 1);
                pb.set_message(format!("AcceptRate={:.3}", accept_rate));
                last_update = Instant::now();
            }
        }
        pb.finish_with_message("Done!");
        chain
    }
}

/// Runs `n_chains` independent samplers in parallel and collects their chains.
///
/// Chain `i` is seeded with `seed + i`, so the whole ensemble is reproducible
/// from a single value. The chains share no mutable state; results are
/// combined only after every chain completes.
pub fn sample_chains<M>(
    observations: &Observations,
    model: &M,
    initial: (f64, f64),
    config: MomentumConfig,
    n_chains: usize,
    seed: u64,
) -> Result<Vec<Chain>, SamplerError>
where
    M: Model + Clone + Send + Sync,
{
    let mut samplers = (0..n_chains)
        .map(|i| {
            MomentumSampler::new(observations.clone(), model.clone(), initial, config)
                .map(|sampler| sampler.set_seed(seed + i as u64))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(samplers
        .par_iter_mut()
        .map(|sampler| sampler.run())
        .collect())
}
