//! Statistical inference (standard errors, p-values, significance, extrapolation).

mod coefficient;
mod prediction;
mod significance;

pub use coefficient::{CoefficientInference, ParameterTest};
pub use prediction::{
    extrapolate, extrapolation_grid, mean_response_se, GRID_FROM, GRID_STEPS, GRID_TO,
};
pub use significance::{significance, Significance, SIGNIFICANCE_LEGEND};
