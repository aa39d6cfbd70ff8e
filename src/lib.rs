pub mod chain;
pub mod error;
pub mod likelihood;
pub mod momentum;
pub mod rng;
pub mod stats;
pub mod synthetic;

#[cfg(feature = "csv")]
pub mod io;
