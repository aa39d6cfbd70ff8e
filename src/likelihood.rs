/*!
# Gaussian Log-Likelihood for Two-Parameter Curve Models

Scores a candidate parameter pair `(a, b)` against a fixed set of observations
`(x_i, y_i, dy_i)` under independent, heteroscedastic Gaussian errors:

```text
log L = -1/2 * sum_i [ (y_i - f(x_i; a, b))^2 / dy_i^2 ]
```

If the model produces a non-finite value for any `x_i`, the log-likelihood is
negative infinity. The acceptance test downstream therefore always sees a
well-defined number, never NaN.

# Examples

```rust
use param_insight::likelihood::{log_likelihood, Observations};

let obs = Observations::new(vec![0.0, 1.0], vec![1.0, 3.0], vec![1.0, 1.0]).unwrap();
let model = |x: f64, a: f64, b: f64| a * x + b;

// Perfect fit: chi-square is zero.
assert_eq!(log_likelihood(2.0, 1.0, &obs, &model), 0.0);
```
*/

use ndarray::Array1;

use crate::error::SamplerError;

/// A deterministic two-parameter curve model `f(x; a, b)`.
///
/// Implemented for free via the blanket impl by any `Fn(f64, f64, f64) -> f64`
/// closure or function pointer. Implementations must be pure: no side effects,
/// no internal state.
pub trait Model {
    fn evaluate(&self, x: f64, a: f64, b: f64) -> f64;
}

impl<F> Model for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn evaluate(&self, x: f64, a: f64, b: f64) -> f64 {
        self(x, a, b)
    }
}

/// An ordered set of observation triples `(x_i, y_i, dy_i)`, fixed for the
/// lifetime of a run.
///
/// The uncertainties `dy_i` are trusted to be strictly positive. That is a
/// documented caller precondition, checked only in debug builds; a zero or
/// negative `dy_i` propagates non-finite arithmetic unguarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    x: Array1<f64>,
    y: Array1<f64>,
    dy: Array1<f64>,
}

impl Observations {
    /// Builds an observation set from equally long columns.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::LengthMismatch`] if the columns differ in
    /// length.
    pub fn new(
        x: impl Into<Array1<f64>>,
        y: impl Into<Array1<f64>>,
        dy: impl Into<Array1<f64>>,
    ) -> Result<Self, SamplerError> {
        let (x, y, dy) = (x.into(), y.into(), dy.into());
        if x.len() != y.len() || x.len() != dy.len() {
            return Err(SamplerError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                dy: dy.len(),
            });
        }
        debug_assert!(
            dy.iter().all(|&e| e > 0.0),
            "observational uncertainties must be strictly positive"
        );
        Ok(Self { x, y, dy })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    pub fn dy(&self) -> &Array1<f64> {
        &self.dy
    }
}

/// Computes the Gaussian log-likelihood of `(a, b)` against `obs` under
/// `model`.
///
/// Returns `f64::NEG_INFINITY` as soon as the model yields a non-finite value
/// for any observation. Never returns NaN.
pub fn log_likelihood<M: Model>(a: f64, b: f64, obs: &Observations, model: &M) -> f64 {
    let mut chi2 = 0.0;
    for ((&x, &y), &dy) in obs.x.iter().zip(obs.y.iter()).zip(obs.dy.iter()) {
        let fit = model.evaluate(x, a, b);
        if !fit.is_finite() {
            return f64::NEG_INFINITY;
        }
        let r = (y - fit) / dy;
        chi2 += r * r;
    }
    -0.5 * chi2
}
