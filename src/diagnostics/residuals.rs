//! Fitted values and residuals.

use crate::core::FitResult;
use faer::Col;

/// Fitted values yp_i = c0 + c1 x_i.
pub fn fitted_values(fit: &FitResult, x: &Col<f64>) -> Col<f64> {
    Col::from_fn(x.nrows(), |i| fit.evaluate(x[i]))
}

/// Residuals res_i = yp_i - y_i (fitted minus observed).
pub fn residuals(fitted: &Col<f64>, y: &Col<f64>) -> Col<f64> {
    Col::from_fn(y.nrows(), |i| fitted[i] - y[i])
}
