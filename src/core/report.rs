//! Diagnostics report structures.

use super::result::FitResult;
use crate::inference::Significance;
use faer::Col;

/// Complete diagnostics for a fitted simple linear regression.
///
/// A read-only view over a [`FitResult`] and the sample it came from. Built by
/// [`crate::diagnostics::diagnose`].
#[derive(Debug, Clone)]
pub struct DiagnosticsReport {
    /// The fit the report was derived from.
    pub fit: FitResult,

    // ========== Inference ==========
    /// Standard error of the intercept, √cov00.
    pub se_c0: f64,

    /// Standard error of the slope, √cov11.
    pub se_c1: f64,

    /// t-statistic of the intercept.
    pub t_c0: f64,

    /// t-statistic of the slope.
    pub t_c1: f64,

    /// Two-sided p-value of the intercept.
    pub p_c0: f64,

    /// Two-sided p-value of the slope.
    pub p_c1: f64,

    /// Significance label for `p_c0`.
    pub significance_c0: Significance,

    /// Significance label for `p_c1`.
    pub significance_c1: Significance,

    // ========== Association ==========
    /// Population covariance of x and y.
    pub covariance: f64,

    /// Pearson correlation r.
    pub correlation: f64,

    /// Coefficient of determination r × r.
    pub r_squared: f64,

    /// Spearman rank correlation.
    pub spearman: f64,

    // ========== Per-observation ==========
    /// Observed x values, in input order.
    pub x: Col<f64>,

    /// Observed y values, in input order.
    pub y: Col<f64>,

    /// Fitted values c0 + c1 x_i.
    pub fitted_values: Col<f64>,

    /// Residuals, fitted minus observed.
    pub residuals: Col<f64>,
}

/// One row of the per-observation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
    pub fitted: f64,
    pub residual: f64,
}

impl DiagnosticsReport {
    /// Number of observations.
    pub fn n_observations(&self) -> usize {
        self.x.nrows()
    }

    /// Iterate over the per-observation rows in input order.
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        (0..self.n_observations()).map(move |i| Observation {
            x: self.x[i],
            y: self.y[i],
            fitted: self.fitted_values[i],
            residual: self.residuals[i],
        })
    }
}
