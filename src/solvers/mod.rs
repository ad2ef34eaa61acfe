//! Regression solvers.

mod ols;
mod traits;

pub use ols::{fit, FittedLinear, LinearRegressor, LinearRegressorBuilder};
pub use traits::{Degeneracy, FittedRegressor, Parameter, RegressionError, Regressor};
