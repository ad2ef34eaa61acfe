//! Simple OLS fit tests.

mod common;

use approx::assert_relative_eq;
use common::reference;
use faer::Col;
use linreg_diagnostics::prelude::*;

// ============================================================================
// Basic Regression Tests
// ============================================================================

#[test]
fn test_exact_line() {
    // y = 2 + 3*x
    let sample = Sample::new(&[0.0, 1.0, 2.0, 3.0, 4.0], &[2.0, 5.0, 8.0, 11.0, 14.0])
        .expect("valid sample");

    let fit = fit(&sample).expect("fit should succeed");

    assert_relative_eq!(fit.c1, 3.0, epsilon = 1e-12);
    assert_relative_eq!(fit.c0, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fit.sumsq, 0.0, epsilon = 1e-20);
}

#[test]
fn test_reference_dataset_coefficients() {
    let fit = fit(&Sample::reference()).expect("fit should succeed");

    assert_relative_eq!(fit.c0, reference::C0, max_relative = 1e-12);
    assert_relative_eq!(fit.c1, reference::C1, max_relative = 1e-12);
    assert_relative_eq!(fit.sumsq, reference::SUMSQ, max_relative = 1e-12);
    assert!(fit.c1 > 0.0);
}

#[test]
fn test_reference_dataset_covariance_matrix() {
    let fit = fit(&Sample::reference()).expect("fit should succeed");

    assert_relative_eq!(fit.cov00, reference::COV00, max_relative = 1e-12);
    assert_relative_eq!(fit.cov01, reference::COV01, max_relative = 1e-12);
    assert_relative_eq!(fit.cov11, reference::COV11, max_relative = 1e-12);
    assert_eq!(fit.residual_df(), 13);
}

#[test]
fn test_intercept_from_means() {
    let fit = fit(&Sample::reference()).expect("fit should succeed");
    assert_relative_eq!(fit.x_mean, 16.6, epsilon = 1e-12);
    assert_relative_eq!(fit.c0, fit.y_mean - fit.c1 * fit.x_mean, epsilon = 1e-12);
}

#[test]
fn test_matches_independent_formula() {
    for seed in [1, 7, 42, 1234] {
        let sample = common::generate_linear_sample(25, -1.5, 0.75, 2.0, seed);
        let x: Vec<f64> = sample.x().iter().copied().collect();
        let y: Vec<f64> = sample.y().iter().copied().collect();

        let (intercept, slope) = common::naive_ols(&x, &y);
        let fit = fit(&sample).expect("fit should succeed");

        assert_relative_eq!(fit.c0, intercept, epsilon = 1e-9);
        assert_relative_eq!(fit.c1, slope, epsilon = 1e-9);
    }
}

#[test]
fn test_least_squares_minimum() {
    // Perturbing either coefficient must not lower the residual sum of squares.
    let sample = common::generate_linear_sample(30, 4.0, -2.0, 1.0, 99);
    let fit = fit(&sample).expect("fit should succeed");

    let rss = |c0: f64, c1: f64| -> f64 {
        sample
            .pairs()
            .map(|(x, y)| (y - c0 - c1 * x).powi(2))
            .sum()
    };

    let best = rss(fit.c0, fit.c1);
    assert_relative_eq!(best, fit.sumsq, max_relative = 1e-10);
    for delta in [-1e-3, 1e-3] {
        assert!(rss(fit.c0 + delta, fit.c1) > best);
        assert!(rss(fit.c0, fit.c1 + delta) > best);
    }
}

#[test]
fn test_fit_is_idempotent() {
    let sample = Sample::reference();
    let first = fit(&sample).expect("fit should succeed");
    let second = fit(&sample).expect("fit should succeed");
    assert_eq!(first, second);
}

// ============================================================================
// Estimator API Tests
// ============================================================================

#[test]
fn test_regressor_builder_and_predict() {
    let sample = Sample::reference();
    let fitted = LinearRegressor::builder()
        .band_width(1.96)
        .build()
        .fit(&sample)
        .expect("fit should succeed");

    assert_relative_eq!(fitted.intercept(), reference::C0, max_relative = 1e-12);
    assert_relative_eq!(fitted.slope(), reference::C1, max_relative = 1e-12);
    assert_relative_eq!(fitted.options().band_width, 1.96, epsilon = 1e-15);

    let x_new = Col::from_fn(2, |i| 10.0 + 10.0 * i as f64);
    let preds = fitted.predict(&x_new);
    assert_relative_eq!(preds[0], reference::C0 + 10.0 * reference::C1, epsilon = 1e-9);
    assert_relative_eq!(preds[1], reference::C0 + 20.0 * reference::C1, epsilon = 1e-9);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_constant_x_is_degenerate() {
    let sample = Sample::new(&[5.0; 6], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid sample");
    let err = fit(&sample).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DegenerateInput(Degeneracy::ConstantPredictor)
    );
}

#[test]
fn test_huge_x_overflows_instead_of_fitting() {
    let sample = Sample::new(&[1e200, 2e200, 3e200, 4e200], &[1.0, 3.0, 2.0, 5.0])
        .expect("valid sample");
    let err = fit(&sample).unwrap_err();
    assert!(matches!(
        err,
        RegressionError::DegenerateInput(Degeneracy::Overflow(_))
    ));
    assert_eq!(
        err.to_string(),
        "degenerate input: Sxx overflowed to a non-finite value"
    );
}

#[test]
fn test_tiny_x_underflows_to_constant_predictor() {
    let sample = Sample::new(&[1e-170, 2e-170, 3e-170], &[1.0, 3.0, 2.0]).expect("valid sample");
    assert_eq!(
        fit(&sample).unwrap_err(),
        RegressionError::DegenerateInput(Degeneracy::ConstantPredictor)
    );
}

#[test]
fn test_two_points_are_degenerate() {
    let err = Sample::new(&[1.0, 2.0], &[3.0, 4.0]).unwrap_err();
    assert!(matches!(
        err,
        RegressionError::DegenerateInput(Degeneracy::TooFewObservations(2))
    ));
}

#[test]
fn test_length_mismatch() {
    let err = Sample::new(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, RegressionError::ShapeMismatch { x_len: 4, y_len: 3 });
    assert_eq!(
        err.to_string(),
        "shape mismatch: x has 4 values but y has 3"
    );
}

#[test]
fn test_error_messages() {
    let err = RegressionError::from(Degeneracy::ConstantPredictor);
    assert_eq!(err.to_string(), "degenerate input: x values have zero variance (all identical, or Sxx underflowed)");

    let err = RegressionError::from(Degeneracy::ZeroStandardError(Parameter::Slope));
    assert_eq!(err.to_string(), "degenerate input: standard error of c1 is zero");
}
