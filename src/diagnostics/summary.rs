//! Assembly of the full diagnostics report.

use super::correlation::{covariance, pearson, spearman};
use super::residuals::{fitted_values, residuals};
use crate::core::{DiagnosticsReport, FitResult, Sample};
use crate::inference::{significance, CoefficientInference};
use crate::solvers::{Degeneracy, Parameter, RegressionError};

/// Derive every diagnostic statistic of `fit` over `sample`.
///
/// Fails when `fit` was computed from a sample of a different size, or when a
/// statistic is undefined (zero standard error, constant response).
pub fn diagnose(sample: &Sample, fit: &FitResult) -> Result<DiagnosticsReport, RegressionError> {
    if fit.n_observations != sample.len() {
        return Err(RegressionError::FitSampleMismatch {
            fit_len: fit.n_observations,
            sample_len: sample.len(),
        });
    }

    let intercept = CoefficientInference::test(fit, Parameter::Intercept)?;
    let slope = CoefficientInference::test(fit, Parameter::Slope)?;

    let x = sample.x();
    let y = sample.y();

    // Sample guarantees equal lengths, so these only fail on a constant y,
    // which the standard-error check above already rejects.
    let (cov, r, spear) = match (covariance(x, y), pearson(x, y), spearman(x, y)) {
        (Some(cov), Some(r), Some(spear)) => (cov, r, spear),
        _ => return Err(Degeneracy::ConstantResponse.into()),
    };

    let fitted = fitted_values(fit, x);
    let res = residuals(&fitted, y);

    tracing::debug!(
        t_c0 = intercept.t_statistic,
        t_c1 = slope.t_statistic,
        p_c0 = intercept.p_value,
        p_c1 = slope.p_value,
        r,
        spearman = spear,
        "computed regression diagnostics"
    );

    Ok(DiagnosticsReport {
        fit: *fit,
        se_c0: intercept.std_error,
        se_c1: slope.std_error,
        t_c0: intercept.t_statistic,
        t_c1: slope.t_statistic,
        p_c0: intercept.p_value,
        p_c1: slope.p_value,
        significance_c0: significance(intercept.p_value),
        significance_c1: significance(slope.p_value),
        covariance: cov,
        correlation: r,
        r_squared: r * r,
        spearman: spear,
        x: x.clone(),
        y: y.clone(),
        fitted_values: fitted,
        residuals: res,
    })
}
