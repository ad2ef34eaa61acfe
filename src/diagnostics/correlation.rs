//! Covariance, Pearson and Spearman correlation.

use crate::utils::{center_vector, sum_of_products};
use faer::Col;

/// Population covariance: (1/n) Σ(x_i - x̄)(y_i - ȳ).
///
/// Returns `None` if the vectors are empty or differ in length.
pub fn covariance(x: &Col<f64>, y: &Col<f64>) -> Option<f64> {
    let n = x.nrows();
    if n == 0 || n != y.nrows() {
        return None;
    }

    let (xc, _) = center_vector(x);
    let (yc, _) = center_vector(y);

    Some(sum_of_products(&xc, &yc) / n as f64)
}

/// Population standard deviation: √((1/n) Σ(x_i - x̄)²).
pub fn std_dev(x: &Col<f64>) -> Option<f64> {
    covariance(x, x).map(f64::sqrt)
}

/// Pearson correlation r = cov(x, y) / (σx σy), population moments.
///
/// Returns `None` if either variable has zero variance.
pub fn pearson(x: &Col<f64>, y: &Col<f64>) -> Option<f64> {
    let cov = covariance(x, y)?;
    let sx = std_dev(x)?;
    let sy = std_dev(y)?;

    if sx == 0.0 || sy == 0.0 {
        return None;
    }

    Some(cov / (sx * sy))
}

/// Ranks starting at 1, ties sharing the average of the ranks they span.
pub fn average_ranks(x: &Col<f64>) -> Col<f64> {
    let n = x.nrows();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));

    let mut ranks = Col::zeros(n);
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && x[order[end + 1]] == x[order[start]] {
            end += 1;
        }

        // positions start..=end hold ranks start+1..=end+1
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = rank;
        }

        start = end + 1;
    }

    ranks
}

/// Spearman rank correlation: Pearson correlation of the average ranks.
pub fn spearman(x: &Col<f64>, y: &Col<f64>) -> Option<f64> {
    if x.nrows() != y.nrows() {
        return None;
    }
    pearson(&average_ranks(x), &average_ranks(y))
}
