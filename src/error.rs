//! Error types surfaced at sampler and observation-set construction.

use thiserror::Error;

/// Configuration and shape errors. All variants are raised before any sampling
/// step executes; nothing in this crate fails mid-run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplerError {
    #[error("observation columns differ in length: x={x}, y={y}, dy={dy}")]
    LengthMismatch { x: usize, y: usize, dy: usize },

    #[error("n_steps must be at least 1")]
    NoSteps,

    #[error("noise scale must be finite and non-negative, got {0}")]
    BadScale(f64),

    #[error("momentum persistence rho must lie strictly inside (0, 1), got {0}")]
    BadRho(f64),
}
