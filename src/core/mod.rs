//! Core types for regression diagnostics.

mod options;
mod prediction;
mod report;
mod result;
mod sample;

pub use options::{DiagnosticsOptions, DiagnosticsOptionsBuilder, OptionsError};
pub use prediction::{ExtrapolatedPoint, Extrapolation};
pub use report::{DiagnosticsReport, Observation};
pub use result::FitResult;
pub use sample::{Sample, MIN_OBSERVATIONS, REFERENCE_X, REFERENCE_Y};
