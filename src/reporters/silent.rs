//! Silent reporter for multiplication runs
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{Reporter, RunReporter};
use crate::config::Algorithm;
use crate::matrix::Matrix;
use std::time::Duration;

/// Silent implementation for multiplication runs
#[derive(Default)]
pub struct SilentRunReporter;

impl SilentRunReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentRunReporter {
    fn report_complete(&self, _message: &str) {}
}

impl RunReporter for SilentRunReporter {
    fn report_run_start(&self, _size: usize, _algorithm: Algorithm) {}
    fn report_inputs(&self, _a: &Matrix, _b: &Matrix) {}
    fn report_product(&self, _algorithm: Algorithm, _product: &Matrix, _elapsed: Duration) {}
    fn report_agreement(&self, _agree: bool) {}
}
