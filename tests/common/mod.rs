//! Common test utilities and data generators.
#![allow(dead_code)]

use linreg_diagnostics::Sample;

/// Closed-form values for the reference dataset.
pub mod reference {
    pub const C0: f64 = 26.741_987_179_487_19;
    pub const C1: f64 = 3.216_346_153_846_153_3;
    pub const SUMSQ: f64 = 201.386_217_948_717_98;
    pub const COV00: f64 = 103.647_369_321_486_41;
    pub const COV01: f64 = -6.181_603_583_485_058;
    pub const COV11: f64 = 0.372_385_758_041_268_44;
    pub const SE_C0: f64 = 10.180_735_205_351_645;
    pub const SE_C1: f64 = 0.610_234_182_950_503_4;
    pub const T_C0: f64 = 2.626_724_557_714_642_3;
    pub const T_C1: f64 = 5.270_675_166_531_983_5;
    pub const P_C0: f64 = 0.020_917_194_536;
    pub const P_C1: f64 = 0.000_151_346_166_5;
    pub const COVARIANCE: f64 = 8.92;
    pub const R: f64 = 0.825_358_354_367_759;
    pub const SPEARMAN: f64 = 0.850_905_301_947_932_3;
}

/// Generate y = intercept + slope * x + deterministic noise over x = 0..n.
pub fn generate_linear_sample(n: usize, intercept: f64, slope: f64, noise: f64, seed: u64) -> Sample {
    let mut state = seed;
    let mut next_rand = || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| intercept + slope * xi + noise * next_rand())
        .collect();

    Sample::new(&x, &y).expect("generated sample is valid")
}

/// Independent two-pass OLS used to cross-check the estimator.
pub fn naive_ols(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let sx: f64 = x.iter().sum();
    let sy: f64 = y.iter().sum();
    let sxx: f64 = x.iter().map(|v| v * v).sum();
    let sxy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

    let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
    let intercept = (sy - slope * sx) / n;
    (intercept, slope)
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
