//! Ordinary least-squares diagnostics for bivariate samples.
//!
//! Fits `y = c0 + c1 x` by least squares and derives the usual diagnostics:
//! standard errors, t-statistics, two-sided p-values with significance codes,
//! the parameter covariance matrix, covariance, Pearson and Spearman
//! correlation, r², and per-observation fitted values and residuals.
//!
//! # Example
//!
//! ```rust,ignore
//! use linreg_diagnostics::prelude::*;
//!
//! let sample = Sample::new(&x, &y)?;
//! let fit = fit(&sample)?;
//! let report = diagnose(&sample, &fit)?;
//!
//! println!("{}", render(&report));
//! println!("slope p-value = {} ({})", report.p_c1, report.significance_c1);
//! ```

pub mod core;
pub mod diagnostics;
pub mod display;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        DiagnosticsOptions, DiagnosticsOptionsBuilder, DiagnosticsReport, ExtrapolatedPoint,
        Extrapolation, FitResult, Observation, OptionsError, Sample,
    };
    pub use crate::diagnostics::{
        average_ranks, covariance, diagnose, fitted_values, pearson, residuals, spearman,
    };
    pub use crate::display::{format_g, render};
    pub use crate::inference::{
        extrapolate, extrapolation_grid, mean_response_se, significance, Significance,
    };
    pub use crate::solvers::{
        fit, Degeneracy, FittedLinear, FittedRegressor, LinearRegressor, Parameter,
        RegressionError, Regressor,
    };
}

pub use crate::core::{DiagnosticsOptions, DiagnosticsReport, FitResult, Sample};
pub use crate::diagnostics::diagnose;
pub use crate::display::render;
pub use crate::inference::{significance, Significance};
pub use crate::solvers::{fit, Degeneracy, RegressionError};
