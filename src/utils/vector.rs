//! Vector utility functions.

use faer::Col;

/// Arithmetic mean of a vector.
pub fn mean(v: &Col<f64>) -> f64 {
    v.iter().sum::<f64>() / v.nrows() as f64
}

/// Center a vector by subtracting the mean.
pub fn center_vector(y: &Col<f64>) -> (Col<f64>, f64) {
    let n = y.nrows();
    let mean = mean(y);

    let centered = Col::from_fn(n, |i| y[i] - mean);

    (centered, mean)
}

/// Σ a_i b_i over two vectors of equal length.
pub fn sum_of_products(a: &Col<f64>, b: &Col<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(&ai, &bi)| ai * bi).sum()
}
