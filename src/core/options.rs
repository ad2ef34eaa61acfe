//! Diagnostics options and configuration.

use thiserror::Error;

/// Configuration options for fitting and extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsOptions {
    /// Sxx at or below this value is treated as a constant predictor (default: 0.0).
    pub variance_tolerance: f64,
    /// Number of standard errors spanned by extrapolation bands (default: 1.0).
    pub band_width: f64,
}

impl Default for DiagnosticsOptions {
    fn default() -> Self {
        Self {
            variance_tolerance: 0.0,
            band_width: 1.0,
        }
    }
}

/// Errors that can occur when validating diagnostics options.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OptionsError {
    #[error("variance_tolerance must be non-negative and finite, got {0}")]
    InvalidVarianceTolerance(f64),
    #[error("band_width must be positive and finite, got {0}")]
    InvalidBandWidth(f64),
}

impl DiagnosticsOptions {
    /// Create a new builder for diagnostics options.
    pub fn builder() -> DiagnosticsOptionsBuilder {
        DiagnosticsOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.variance_tolerance.is_finite() || self.variance_tolerance < 0.0 {
            return Err(OptionsError::InvalidVarianceTolerance(
                self.variance_tolerance,
            ));
        }
        if !self.band_width.is_finite() || self.band_width <= 0.0 {
            return Err(OptionsError::InvalidBandWidth(self.band_width));
        }
        Ok(())
    }
}

/// Builder for `DiagnosticsOptions`.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsOptionsBuilder {
    options: DiagnosticsOptions,
}

impl DiagnosticsOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance below which the predictor counts as constant.
    pub fn variance_tolerance(mut self, tol: f64) -> Self {
        self.options.variance_tolerance = tol;
        self
    }

    /// Set the width of extrapolation bands, in standard errors.
    pub fn band_width(mut self, width: f64) -> Self {
        self.options.band_width = width;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<DiagnosticsOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> DiagnosticsOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = DiagnosticsOptions::default();
        assert_eq!(opts.variance_tolerance, 0.0);
        assert!((opts.band_width - 1.0).abs() < 1e-15);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let opts = DiagnosticsOptions::builder()
            .variance_tolerance(1e-12)
            .band_width(2.0)
            .build()
            .unwrap();

        assert!((opts.variance_tolerance - 1e-12).abs() < 1e-20);
        assert!((opts.band_width - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_validation_negative_tolerance() {
        let result = DiagnosticsOptions::builder().variance_tolerance(-1.0).build();
        assert!(matches!(
            result,
            Err(OptionsError::InvalidVarianceTolerance(_))
        ));
    }

    #[test]
    fn test_validation_band_width() {
        let zero = DiagnosticsOptions::builder().band_width(0.0).build();
        assert!(matches!(zero, Err(OptionsError::InvalidBandWidth(_))));

        let inf = DiagnosticsOptions::builder()
            .band_width(f64::INFINITY)
            .build();
        assert!(matches!(inf, Err(OptionsError::InvalidBandWidth(_))));
    }

    #[test]
    fn test_build_unchecked_skips_validation() {
        let opts = DiagnosticsOptionsBuilder::new()
            .band_width(-3.0)
            .build_unchecked();
        assert!((opts.band_width + 3.0).abs() < 1e-15);
    }
}
