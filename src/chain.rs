//! An append-only record of visited parameter pairs and their log-likelihoods.
//!
//! Storage is pre-sized to the requested step count and written monotonically
//! by index while the sampler runs; once a run completes the chain is
//! read-only. Burn-in removal is a post-processing concern of the caller, via
//! [`Chain::discard`].

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    samples: Array2<f64>,   // n_steps x 2, columns (a, b)
    log_likes: Array1<f64>, // n_steps
}

impl Chain {
    pub(crate) fn with_len(n_steps: usize) -> Self {
        Self {
            samples: Array2::zeros((n_steps, 2)),
            log_likes: Array1::zeros(n_steps),
        }
    }

    pub(crate) fn record(&mut self, idx: usize, a: f64, b: f64, log_like: f64) {
        self.samples[[idx, 0]] = a;
        self.samples[[idx, 1]] = b;
        self.log_likes[idx] = log_like;
    }

    /// Drops every row at index `keep` or later. Used when a run is cancelled
    /// between steps; rows up to the last committed index stay valid.
    pub(crate) fn truncate(&mut self, keep: usize) {
        self.samples = self.samples.slice(s![..keep, ..]).to_owned();
        self.log_likes = self.log_likes.slice(s![..keep]).to_owned();
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.log_likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_likes.is_empty()
    }

    /// The visited parameter pairs as an `n x 2` view, columns `(a, b)`.
    pub fn positions(&self) -> ArrayView2<f64> {
        self.samples.view()
    }

    pub fn log_likelihoods(&self) -> ArrayView1<f64> {
        self.log_likes.view()
    }

    /// The record at step `idx` as `(a, b, log_likelihood)`.
    pub fn row(&self, idx: usize) -> (f64, f64, f64) {
        (
            self.samples[[idx, 0]],
            self.samples[[idx, 1]],
            self.log_likes[idx],
        )
    }

    /// Views of the chain with the first `burn_in` rows removed.
    pub fn discard(&self, burn_in: usize) -> (ArrayView2<f64>, ArrayView1<f64>) {
        (
            self.samples.slice(s![burn_in.., ..]),
            self.log_likes.slice(s![burn_in..]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_row_chain() -> Chain {
        let mut chain = Chain::with_len(3);
        chain.record(0, 0.0, 1.0, -2.0);
        chain.record(1, 0.5, 1.5, -1.0);
        chain.record(2, 1.0, 2.0, -0.5);
        chain
    }

    #[test]
    fn records_land_at_their_index() {
        let chain = three_row_chain();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.row(1), (0.5, 1.5, -1.0));
        assert_eq!(chain.positions().shape(), &[3, 2]);
    }

    #[test]
    fn discard_drops_prefix_only() {
        let chain = three_row_chain();
        let (positions, log_likes) = chain.discard(2);
        assert_eq!(positions.nrows(), 1);
        assert_eq!(positions[[0, 0]], 1.0);
        assert_eq!(log_likes[0], -0.5);
    }

    #[test]
    fn truncate_keeps_committed_rows() {
        let mut chain = three_row_chain();
        chain.truncate(2);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.row(1), (0.5, 1.5, -1.0));
    }
}
