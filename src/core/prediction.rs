//! Prediction types for extrapolating a fitted line.

use faer::Col;

/// Fitted values over an x range, with error bands for the mean response.
#[derive(Debug, Clone)]
pub struct Extrapolation {
    /// The x values the line was evaluated at.
    pub x: Col<f64>,
    /// Point predictions c0 + c1 x.
    pub fit: Col<f64>,
    /// Standard errors of the mean response.
    pub se: Col<f64>,
    /// Lower band, fit - k * se.
    pub lower: Col<f64>,
    /// Upper band, fit + k * se.
    pub upper: Col<f64>,
}

/// A single row of an [`Extrapolation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolatedPoint {
    pub x: f64,
    pub fit: f64,
    pub se: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Extrapolation {
    /// Number of evaluated points.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Returns true if no points were evaluated.
    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    /// Iterate over the evaluated points in order.
    pub fn points(&self) -> impl Iterator<Item = ExtrapolatedPoint> + '_ {
        (0..self.len()).map(move |i| ExtrapolatedPoint {
            x: self.x[i],
            fit: self.fit[i],
            se: self.se[i],
            lower: self.lower[i],
            upper: self.upper[i],
        })
    }
}
