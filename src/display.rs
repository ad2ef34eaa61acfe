//! Text rendering of diagnostics reports.
//!
//! Numbers are written with the rules of C's `%g` conversion: `precision`
//! significant digits, fixed notation when the decimal exponent lies in
//! `-4..precision`, scientific notation otherwise, and trailing zeros removed.
//!
//! # Layout
//! - banner, model and best-fit equation
//! - residual sum of squares, standard errors, t-values, p-values
//! - significance codes with their legend
//! - parameter covariance matrix, covariance, r, r², Spearman
//! - dataset table `x y yp residuals`, one row per observation

use crate::core::DiagnosticsReport;
use crate::inference::SIGNIFICANCE_LEGEND;
use std::fmt::{self, Write};

/// Significant digits used for most quantities.
pub const DEFAULT_PRECISION: usize = 6;

/// Significant digits used for covariance and correlation coefficients.
pub const COEFFICIENT_PRECISION: usize = 2;

const HEADER: &str = "###################### REGRESSION DIAGNOSTICS ##########################";
const DATASET: &str = "############################ DATASET ######################################";
const FOOTER: &str = "############################ END ######################################";

/// Format `value` like C's `printf("%.*g", precision, value)`.
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Round to `precision` significant digits first; the exponent of the
    // rounded value decides the notation.
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn g(value: f64) -> String {
    format_g(value, DEFAULT_PRECISION)
}

fn g2(value: f64) -> String {
    format_g(value, COEFFICIENT_PRECISION)
}

/// Write the full report into `buffer`.
///
/// # Errors
/// Returns an error if writing to `buffer` fails.
pub fn write_report<B: Write>(buffer: &mut B, report: &DiagnosticsReport) -> fmt::Result {
    let fit = &report.fit;

    writeln!(buffer, "{HEADER}")?;
    writeln!(buffer, "# Model: y = c0 + c1 x")?;
    writeln!(buffer, "# Best fit: y = {} + {} x", g(fit.c0), g(fit.c1))?;
    writeln!(buffer, "# Sum of squares of residuals:  {}", g(fit.sumsq))?;
    writeln!(
        buffer,
        "# Standard error of estimates: c0 = {}, c1 = {}",
        g(report.se_c0),
        g(report.se_c1)
    )?;
    writeln!(
        buffer,
        "# t-value of estimates: c0 = {}, c1 = {}",
        g(report.t_c0),
        g(report.t_c1)
    )?;
    writeln!(
        buffer,
        "# Associated probability values: c0 = {}, c1 = {}",
        g(report.p_c0),
        g(report.p_c1)
    )?;
    writeln!(
        buffer,
        "# Associated significance values: c0 = {}, c1 = {}",
        report.significance_c0, report.significance_c1
    )?;
    writeln!(buffer, "# Interpretation: {SIGNIFICANCE_LEGEND}")?;

    writeln!(buffer, "# Covariance matrix:")?;
    writeln!(buffer, "# [ {}, {}", g(fit.cov00), g(fit.cov01))?;
    writeln!(buffer, "#   {}, {}]", g(fit.cov01), g(fit.cov11))?;
    writeln!(buffer, "# Covariance COV:  {}", g2(report.covariance))?;
    writeln!(buffer, "# Correlation r: {}", g2(report.correlation))?;
    writeln!(
        buffer,
        "# Coefficient of determination r2: {}",
        g2(report.r_squared)
    )?;
    writeln!(buffer, "# Spearman correlation:  {}", g2(report.spearman))?;

    writeln!(buffer, "{DATASET}")?;
    writeln!(buffer, "# Dataset:")?;
    writeln!(buffer, "x  y  yp residuals")?;
    for obs in report.observations() {
        writeln!(
            buffer,
            "{} {} {} {}",
            g(obs.x),
            g(obs.y),
            g(obs.fitted),
            g(obs.residual)
        )?;
    }
    writeln!(buffer)?;
    writeln!(buffer, "{FOOTER}")
}

/// Render the report as text.
pub fn render(report: &DiagnosticsReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self)
    }
}
