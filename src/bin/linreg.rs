//! Print regression diagnostics for the reference dataset.
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use linreg_diagnostics::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(sample: &Sample) -> Result<String, RegressionError> {
    let fit = fit(sample)?;
    let report = diagnose(sample, &fit)?;
    Ok(render(&report))
}

fn main() -> ExitCode {
    init_logging();

    let sample = Sample::reference();
    tracing::info!(n = sample.len(), "running regression diagnostics");

    match run(&sample) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "cannot produce regression diagnostics");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
