//! Coefficient inference calculations.

use crate::core::FitResult;
use crate::solvers::{Degeneracy, Parameter, RegressionError};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Standard error, t-statistic and p-value of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterTest {
    pub estimate: f64,
    pub std_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
}

/// Computes inference statistics for the intercept and slope.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard error of `parameter`.
    ///
    /// SE(c0) = √cov00, SE(c1) = √cov11
    pub fn standard_error(fit: &FitResult, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Intercept => fit.cov00.sqrt(),
            Parameter::Slope => fit.cov11.sqrt(),
        }
    }

    /// t-statistic: estimate / SE.
    ///
    /// A zero or non-finite standard error leaves the test undefined.
    pub fn t_statistic(
        estimate: f64,
        std_error: f64,
        parameter: Parameter,
    ) -> Result<f64, RegressionError> {
        if std_error == 0.0 || !std_error.is_finite() {
            tracing::warn!(%parameter, std_error, "cannot form t-statistic");
            return Err(Degeneracy::ZeroStandardError(parameter).into());
        }
        Ok(estimate / std_error)
    }

    /// Two-sided p-value: p = 2 P(T ≤ -|t|) where T ~ t(df).
    ///
    /// Returns NaN when `df` is not positive or `t` is NaN.
    pub fn p_value(t: f64, df: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => 2.0 * dist.cdf(-t.abs()),
            Err(_) => f64::NAN,
        }
    }

    /// Full test of one parameter of `fit`.
    pub fn test(fit: &FitResult, parameter: Parameter) -> Result<ParameterTest, RegressionError> {
        let estimate = match parameter {
            Parameter::Intercept => fit.c0,
            Parameter::Slope => fit.c1,
        };
        let std_error = Self::standard_error(fit, parameter);
        let t_statistic = Self::t_statistic(estimate, std_error, parameter)?;
        let p_value = Self::p_value(t_statistic, fit.residual_df() as f64);

        Ok(ParameterTest {
            estimate,
            std_error,
            t_statistic,
            p_value,
        })
    }
}
