//! Simple ordinary least squares: `y = c0 + c1 x`.

use crate::core::{
    DiagnosticsOptions, DiagnosticsOptionsBuilder, Extrapolation, FitResult, Sample,
    MIN_OBSERVATIONS,
};
use crate::inference::extrapolate;
use crate::solvers::traits::{Degeneracy, FittedRegressor, RegressionError, Regressor};
use crate::utils::{center_vector, sum_of_products};
use faer::Col;

/// Simple linear least-squares estimator.
///
/// Uses the closed-form solution on centered data:
///
/// - c1 = Sxy / Sxx
/// - c0 = ȳ - c1 x̄
///
/// and the parameter covariance from the residual variance σ̂² = RSS / (n - 2).
///
/// # Example
///
/// ```rust,ignore
/// use linreg_diagnostics::prelude::*;
///
/// let sample = Sample::new(&[1.0, 2.0, 3.0, 4.0], &[2.1, 3.9, 6.2, 7.8])?;
/// let fitted = LinearRegressor::builder().build().fit(&sample)?;
///
/// println!("y = {} + {} x", fitted.intercept(), fitted.slope());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearRegressor {
    options: DiagnosticsOptions,
}

impl LinearRegressor {
    /// Create a new regressor with the given options.
    pub fn new(options: DiagnosticsOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LinearRegressorBuilder {
        LinearRegressorBuilder::default()
    }

    /// The options this regressor was built with.
    pub fn options(&self) -> &DiagnosticsOptions {
        &self.options
    }
}

impl Regressor for LinearRegressor {
    type Fitted = FittedLinear;

    fn fit(&self, sample: &Sample) -> Result<Self::Fitted, RegressionError> {
        self.options.validate()?;

        let n = sample.len();
        if n < MIN_OBSERVATIONS {
            return Err(Degeneracy::TooFewObservations(n).into());
        }

        let (x_centered, x_mean) = center_vector(sample.x());
        let (y_centered, y_mean) = center_vector(sample.y());

        let sxx = sum_of_products(&x_centered, &x_centered);
        let sxy = sum_of_products(&x_centered, &y_centered);

        ensure_finite("Sxx", sxx)?;
        ensure_finite("Sxy", sxy)?;

        if sxx <= self.options.variance_tolerance {
            tracing::warn!(sxx, "predictor has no variance, slope is undefined");
            return Err(Degeneracy::ConstantPredictor.into());
        }

        let c1 = sxy / sxx;
        let c0 = y_mean - c1 * x_mean;

        let sumsq: f64 = sample
            .pairs()
            .map(|(xi, yi)| {
                let r = yi - (c0 + c1 * xi);
                r * r
            })
            .sum();

        let n_f = n as f64;
        let sigma2 = sumsq / (n - 2) as f64;

        ensure_finite("residual sum of squares", sumsq)?;

        let cov00 = sigma2 * (1.0 / n_f + x_mean * x_mean / sxx);
        let cov01 = -sigma2 * x_mean / sxx;
        let cov11 = sigma2 / sxx;

        ensure_finite("cov00", cov00)?;
        ensure_finite("cov01", cov01)?;
        ensure_finite("cov11", cov11)?;

        let result = FitResult {
            c0,
            c1,
            cov00,
            cov01,
            cov11,
            sumsq,
            sigma2,
            n_observations: n,
            x_mean,
            y_mean,
            sxx,
        };

        tracing::debug!(n, c0, c1, sumsq, "fitted simple linear regression");

        Ok(FittedLinear {
            options: self.options.clone(),
            result,
        })
    }
}

/// Huge but finite inputs can overflow the moments to infinity.
fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), RegressionError> {
    if value.is_finite() {
        Ok(())
    } else {
        tracing::warn!(quantity, value, "moment overflowed");
        Err(Degeneracy::Overflow(quantity).into())
    }
}

/// Fit `y = c0 + c1 x` with default options.
pub fn fit(sample: &Sample) -> Result<FitResult, RegressionError> {
    LinearRegressor::default()
        .fit(sample)
        .map(|fitted| fitted.result)
}

/// A fitted simple linear regression.
#[derive(Debug, Clone)]
pub struct FittedLinear {
    options: DiagnosticsOptions,
    result: FitResult,
}

impl FittedLinear {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &DiagnosticsOptions {
        &self.options
    }

    /// Consume the model and return its fit.
    pub fn into_result(self) -> FitResult {
        self.result
    }
}

impl FittedRegressor for FittedLinear {
    fn predict(&self, x: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| self.result.evaluate(x[i]))
    }

    fn result(&self) -> &FitResult {
        &self.result
    }

    fn extrapolate(&self, x: &Col<f64>) -> Result<Extrapolation, RegressionError> {
        extrapolate(&self.result, x, self.options.band_width)
    }
}

/// Builder for `LinearRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressorBuilder {
    builder: DiagnosticsOptionsBuilder,
}

impl LinearRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance below which the predictor counts as constant.
    pub fn variance_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.variance_tolerance(tol);
        self
    }

    /// Set the width of extrapolation bands, in standard errors.
    pub fn band_width(mut self, width: f64) -> Self {
        self.builder = self.builder.band_width(width);
        self
    }

    /// Build the regressor. Options are validated when fitting.
    pub fn build(self) -> LinearRegressor {
        LinearRegressor::new(self.builder.build_unchecked())
    }
}
