//! Output reporting for multiplication runs
//!
//! The driver reports inputs, per-algorithm results, and the final agreement
//! check through [`RunReporter`], so the core logic stays independent of how
//! (or whether) anything is printed.

mod console;
mod silent;

pub use console::ConsoleRunReporter;
pub use silent::SilentRunReporter;

use crate::config::Algorithm;
use crate::matrix::Matrix;
use std::time::Duration;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report successful completion of an operation
    fn report_complete(&self, message: &str);
}

/// Trait for reporting a multiplication run
pub trait RunReporter: Reporter {
    /// Report the run about to start
    fn report_run_start(&self, size: usize, algorithm: Algorithm);

    /// Report the two generated operands
    fn report_inputs(&self, a: &Matrix, b: &Matrix);

    /// Report one algorithm's product and how long it took
    fn report_product(&self, algorithm: Algorithm, product: &Matrix, elapsed: Duration);

    /// Report whether the recursive and Strassen products agree
    fn report_agreement(&self, agree: bool);
}
