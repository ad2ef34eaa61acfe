//! Regression result structures.

/// Result of a simple linear least-squares fit `y = c0 + c1 x`.
///
/// Holds the estimates, the covariance matrix of the estimates and the
/// residual sum of squares, together with the sample moments they were
/// derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    // ========== Estimates ==========
    /// Intercept.
    pub c0: f64,

    /// Slope.
    pub c1: f64,

    // ========== Parameter Covariance ==========
    /// Var(c0).
    pub cov00: f64,

    /// Cov(c0, c1).
    pub cov01: f64,

    /// Var(c1).
    pub cov11: f64,

    // ========== Fit Statistics ==========
    /// Residual sum of squares Σ(y_i - c0 - c1 x_i)².
    pub sumsq: f64,

    /// Residual variance σ̂² = sumsq / (n - 2).
    pub sigma2: f64,

    // ========== Sample Moments ==========
    /// Number of observations.
    pub n_observations: usize,

    /// Mean of x.
    pub x_mean: f64,

    /// Mean of y.
    pub y_mean: f64,

    /// Σ(x_i - x̄)².
    pub sxx: f64,
}

impl FitResult {
    /// Residual degrees of freedom (n - 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// Evaluate the fitted line at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.c0 + self.c1 * x
    }

    /// Parameter covariance matrix as rows `[[cov00, cov01], [cov01, cov11]]`.
    pub fn covariance_matrix(&self) -> [[f64; 2]; 2] {
        [[self.cov00, self.cov01], [self.cov01, self.cov11]]
    }
}
