//! Bivariate sample type.

use crate::solvers::{Degeneracy, RegressionError};
use faer::Col;

/// Smallest sample that leaves a positive residual degree of freedom (n - 2).
pub const MIN_OBSERVATIONS: usize = 3;

/// Predictor values of the reference dataset.
pub const REFERENCE_X: [f64; 15] = [
    20.0, 16.0, 20.0, 18.0, 17.0, 16.0, 15.0, 17.0, 15.0, 16.0, 15.0, 17.0, 16.0, 17.0, 14.0,
];

/// Response values of the reference dataset.
pub const REFERENCE_Y: [f64; 15] = [
    89.0, 72.0, 93.0, 84.0, 81.0, 75.0, 70.0, 82.0, 69.0, 83.0, 80.0, 83.0, 81.0, 84.0, 76.0,
];

/// An ordered set of paired observations (x_i, y_i).
///
/// A `Sample` is validated on construction:
/// - `x` and `y` have the same length
/// - there are at least [`MIN_OBSERVATIONS`] pairs
/// - every value is finite
///
/// It is immutable afterwards, so every statistic derived from it is a pure
/// function of the data.
#[derive(Debug, Clone)]
pub struct Sample {
    x: Col<f64>,
    y: Col<f64>,
}

impl Sample {
    /// Build a sample from two slices of equal length.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, RegressionError> {
        let x = Col::from_fn(x.len(), |i| x[i]);
        let y = Col::from_fn(y.len(), |i| y[i]);
        Self::from_cols(x, y)
    }

    /// Build a sample from two columns of equal length.
    pub fn from_cols(x: Col<f64>, y: Col<f64>) -> Result<Self, RegressionError> {
        if x.nrows() != y.nrows() {
            tracing::warn!(x_len = x.nrows(), y_len = y.nrows(), "rejecting sample");
            return Err(RegressionError::ShapeMismatch {
                x_len: x.nrows(),
                y_len: y.nrows(),
            });
        }

        let n = x.nrows();
        if n < MIN_OBSERVATIONS {
            tracing::warn!(n, "rejecting sample with too few observations");
            return Err(Degeneracy::TooFewObservations(n).into());
        }

        if let Some(index) = (0..n).find(|&i| !x[i].is_finite() || !y[i].is_finite()) {
            tracing::warn!(index, "rejecting sample with non-finite value");
            return Err(Degeneracy::NonFinite { index }.into());
        }

        Ok(Self { x, y })
    }

    /// The 15-pair dataset printed by the `linreg` binary.
    pub fn reference() -> Self {
        Self {
            x: Col::from_fn(REFERENCE_X.len(), |i| REFERENCE_X[i]),
            y: Col::from_fn(REFERENCE_Y.len(), |i| REFERENCE_Y[i]),
        }
    }

    /// Predictor values.
    pub fn x(&self) -> &Col<f64> {
        &self.x
    }

    /// Response values.
    pub fn y(&self) -> &Col<f64> {
        &self.y
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Always false for a validated sample; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    /// Iterate over the (x, y) pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.len()).map(move |i| (self.x[i], self.y[i]))
    }
}
