//! Console reporter for multiplication runs

use super::{Reporter, RunReporter};
use crate::config::Algorithm;
use crate::matrix::Matrix;
use std::time::Duration;

/// Console implementation for multiplication runs
#[derive(Default)]
pub struct ConsoleRunReporter {
    /// Also print the matrices themselves, not just timings
    print_matrices: bool,
}

impl ConsoleRunReporter {
    pub fn new(print_matrices: bool) -> Self {
        Self { print_matrices }
    }
}

impl Reporter for ConsoleRunReporter {
    fn report_complete(&self, message: &str) {
        println!("{}", message);
    }
}

impl RunReporter for ConsoleRunReporter {
    fn report_run_start(&self, size: usize, algorithm: Algorithm) {
        println!("Multiplying {0}x{0} matrices ({1})", size, algorithm);
    }

    fn report_inputs(&self, a: &Matrix, b: &Matrix) {
        if self.print_matrices {
            println!("A:");
            print!("{}", a);
            println!("B:");
            print!("{}", b);
        }
    }

    fn report_product(&self, algorithm: Algorithm, product: &Matrix, elapsed: Duration) {
        println!("{} multiply took {:.3?}", algorithm, elapsed);
        if self.print_matrices {
            print!("{}", product);
        }
    }

    fn report_agreement(&self, agree: bool) {
        if agree {
            println!("Recursive and Strassen products agree");
        } else {
            eprintln!("Recursive and Strassen products DIFFER");
        }
    }
}
