//! Core traits for regression estimators.

use crate::core::{Extrapolation, FitResult, OptionsError, Sample};
use faer::Col;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during fitting and diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegressionError {
    #[error("shape mismatch: x has {x_len} values but y has {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },

    #[error("fit was computed from {fit_len} observations but the sample has {sample_len}")]
    FitSampleMismatch { fit_len: usize, sample_len: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] Degeneracy),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

/// Conditions under which the slope, intercept or their tests are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Degeneracy {
    #[error("need at least 3 observations, got {0}")]
    TooFewObservations(usize),

    /// Also raised when the x values are distinct but so close together
    /// (or so small) that Sxx underflows to zero.
    #[error("x values have zero variance (all identical, or Sxx underflowed)")]
    ConstantPredictor,

    #[error("all y values are identical")]
    ConstantResponse,

    #[error("standard error of {0} is zero")]
    ZeroStandardError(Parameter),

    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("{0} overflowed to a non-finite value")]
    Overflow(&'static str),
}

/// A parameter of the model `y = c0 + c1 x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Intercept,
    Slope,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Intercept => f.write_str("c0"),
            Parameter::Slope => f.write_str("c1"),
        }
    }
}

/// A regression estimator that can be fit to a sample.
///
/// Fitting returns a fitted model that can then make predictions.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the sample.
    fn fit(&self, sample: &Sample) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions at the given x values.
    fn predict(&self, x: &Col<f64>) -> Col<f64>;

    /// Access the fit (coefficients, covariance, residual sum of squares).
    fn result(&self) -> &FitResult;

    /// Intercept c0.
    fn intercept(&self) -> f64 {
        self.result().c0
    }

    /// Slope c1.
    fn slope(&self) -> f64 {
        self.result().c1
    }

    /// Evaluate the line over `x` with error bands on the mean response.
    fn extrapolate(&self, x: &Col<f64>) -> Result<Extrapolation, RegressionError>;
}
