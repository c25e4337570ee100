//! Strassen driver - multiplies two random power-of-two matrices
//!
//! Runs the recursive block multiply, Strassen's algorithm, or both, and
//! reports timings (and optionally the matrices) on the console.

use anyhow::{Context, Result};
use strassen::config::RunConfig;
use strassen::driver;
use strassen::reporters::{ConsoleRunReporter, Reporter, RunReporter, SilentRunReporter};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = strassen::parse_args();
    let config = RunConfig::from_args(&matches);

    let reporter: Box<dyn RunReporter> = if config.quiet {
        Box::new(SilentRunReporter::new())
    } else {
        Box::new(ConsoleRunReporter::new(config.print))
    };

    let summary = driver::run(&config, reporter.as_ref())
        .with_context(|| format!("Failed to multiply matrices of size {}", config.size))?;

    if summary.product().is_some() {
        reporter.report_complete("Done");
    }

    Ok(())
}
