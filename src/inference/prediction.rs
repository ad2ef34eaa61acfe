//! Mean-response errors and extrapolation of a fitted line.

use crate::core::{Extrapolation, FitResult, Sample};
use crate::solvers::{Degeneracy, RegressionError};
use faer::Col;

/// Standard error of the fitted mean response at `x`.
///
/// SE(ŷ(x)) = √(cov00 + 2x cov01 + x² cov11)
pub fn mean_response_se(fit: &FitResult, x: f64) -> f64 {
    let var = fit.cov00 + x * (2.0 * fit.cov01 + x * fit.cov11);
    if var >= 0.0 {
        var.sqrt()
    } else {
        f64::NAN
    }
}

/// Evaluate the fitted line over `x`, with bands `fit ∓ band_width · SE`.
///
/// Every x must be finite.
pub fn extrapolate(
    fit: &FitResult,
    x: &Col<f64>,
    band_width: f64,
) -> Result<Extrapolation, RegressionError> {
    let n = x.nrows();

    if let Some(index) = (0..n).find(|&i| !x[i].is_finite()) {
        return Err(Degeneracy::NonFinite { index }.into());
    }

    let fitted = Col::from_fn(n, |i| fit.evaluate(x[i]));
    let se = Col::from_fn(n, |i| mean_response_se(fit, x[i]));
    let lower = Col::from_fn(n, |i| fitted[i] - band_width * se[i]);
    let upper = Col::from_fn(n, |i| fitted[i] + band_width * se[i]);

    tracing::debug!(points = n, band_width, "extrapolated fitted line");

    Ok(Extrapolation {
        x: x.clone(),
        fit: fitted,
        se,
        lower,
        upper,
    })
}

/// Start of the reference extrapolation grid, as a fraction of the x span.
pub const GRID_FROM: f64 = -0.30;

/// End of the reference extrapolation grid, as a fraction of the x span.
pub const GRID_TO: f64 = 1.29;

/// Number of points in the reference extrapolation grid.
pub const GRID_STEPS: usize = 160;

/// Grid of x values running from the first to the last observation.
///
/// Point i is `x_0 + t_i (x_{n-1} - x_0)` with `t_i` evenly spaced over
/// `[from, to]`. Fractions outside `[0, 1]` extend beyond the observed span.
pub fn extrapolation_grid(sample: &Sample, from: f64, to: f64, steps: usize) -> Col<f64> {
    let x = sample.x();
    let first = x[0];
    let span = x[x.nrows() - 1] - first;

    let step = if steps > 1 {
        (to - from) / (steps - 1) as f64
    } else {
        0.0
    };

    Col::from_fn(steps, |i| first + (from + i as f64 * step) * span)
}
