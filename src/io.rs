/*!
# I/O Utilities for Saving Chains to CSV

Writes a recorded chain to a CSV file for external plotting and reporting.
Enable via the `csv` feature.
*/

use std::error::Error;
use std::fs::File;

use csv::Writer;

use crate::chain::Chain;

/// Saves a chain as CSV with columns `step`, `a`, `b`, `log_likelihood`.
///
/// # Examples
///
/// ```rust
/// use param_insight::likelihood::Observations;
/// use param_insight::momentum::{MomentumConfig, MomentumSampler};
/// use param_insight::io::save_csv;
///
/// let obs = Observations::new(vec![0.0, 1.0], vec![1.0, 3.0], vec![0.1, 0.1]).unwrap();
/// let config = MomentumConfig { n_steps: 10, scale: 0.1, rho: 0.9 };
/// let model = |x: f64, a: f64, b: f64| a * x + b;
/// let chain = MomentumSampler::new(obs, model, (0.0, 0.0), config)
///     .unwrap()
///     .set_seed(42)
///     .run();
/// save_csv(&chain, "/tmp/chain.csv").expect("Expected saving the chain to succeed");
/// ```
pub fn save_csv(chain: &Chain, filename: &str) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(File::create(filename)?);
    wtr.write_record(["step", "a", "b", "log_likelihood"])?;
    for idx in 0..chain.len() {
        let (a, b, log_like) = chain.row(idx);
        wtr.write_record(&[
            idx.to_string(),
            a.to_string(),
            b.to_string(),
            log_like.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::likelihood::Observations;
    use crate::momentum::{MomentumConfig, MomentumSampler};

    #[test]
    fn written_file_has_header_and_one_row_per_step() {
        let obs =
            Observations::new(vec![0.0, 1.0], vec![1.0, 3.0], vec![0.1, 0.1]).unwrap();
        let config = MomentumConfig {
            n_steps: 25,
            scale: 0.1,
            rho: 0.9,
        };
        let chain = MomentumSampler::new(obs, |x: f64, a: f64, b: f64| a * x + b, (0.0, 0.0), config)
            .unwrap()
            .set_seed(3)
            .run();

        let dir = std::env::temp_dir().join("param_insight_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("chain.csv");
        let path = path.to_str().unwrap();

        save_csv(&chain, path).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "step,a,b,log_likelihood");
        assert_eq!(lines.len(), 26);
    }
}
