//! Regression diagnostics (correlation, residuals, the full report).
//!
//! - **Correlation**: population covariance, Pearson and Spearman coefficients
//! - **Residuals**: fitted values and residuals (fitted minus observed)
//! - **Summary**: [`diagnose`], which combines these with coefficient inference
//!
//! # Example
//!
//! ```rust,ignore
//! use linreg_diagnostics::diagnostics::{diagnose, spearman};
//! use linreg_diagnostics::solvers::fit;
//!
//! let fit = fit(&sample)?;
//! let report = diagnose(&sample, &fit)?;
//! println!("r = {}, rho = {}", report.correlation, report.spearman);
//! ```

mod correlation;
mod residuals;
mod summary;

pub use correlation::{average_ranks, covariance, pearson, spearman, std_dev};
pub use residuals::{fitted_values, residuals};
pub use summary::diagnose;
