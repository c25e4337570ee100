//! Driver for a single multiplication run
//!
//! Builds two random operands, runs the configured algorithm(s), times each
//! product, and (when both run) checks that they agree.

use crate::config::{Algorithm, RunConfig};
use crate::matrix::{Matrix, MatrixError};
use crate::multiply;
use crate::reporters::RunReporter;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use thiserror::Error;

/// Errors that can end a driver run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// The two algorithms produced different products
    #[error("Recursive and Strassen products differ for size {size}")]
    ProductsDiffer { size: usize },
}

/// Operands and products of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub a: Matrix,
    pub b: Matrix,
    pub recursive: Option<Matrix>,
    pub strassen: Option<Matrix>,
}

impl RunSummary {
    /// The product of the run, whichever algorithm produced it
    pub fn product(&self) -> Option<&Matrix> {
        self.strassen.as_ref().or(self.recursive.as_ref())
    }
}

/// Generate the two operands for a run
pub fn generate_operands(config: &RunConfig) -> Result<(Matrix, Matrix), MatrixError> {
    match config.seed {
        Some(seed) => {
            debug!("Generating operands with seed {}", seed);
            let mut rng = StdRng::seed_from_u64(seed);
            Ok((
                Matrix::random_with(config.size, &mut rng)?,
                Matrix::random_with(config.size, &mut rng)?,
            ))
        }
        None => Ok((Matrix::random(config.size)?, Matrix::random(config.size)?)),
    }
}

/// Run the configured multiplication(s), reporting through `reporter`
pub fn run<R: RunReporter + ?Sized>(
    config: &RunConfig,
    reporter: &R,
) -> Result<RunSummary, RunError> {
    reporter.report_run_start(config.size, config.algorithm);

    let (a, b) = generate_operands(config)?;
    reporter.report_inputs(&a, &b);

    let recursive = if config.algorithm.runs_recursive() {
        let start = Instant::now();
        let product = multiply::multiply(&a, &b)?;
        let elapsed = start.elapsed();
        info!("recursive multiply of size {} took {:?}", config.size, elapsed);
        reporter.report_product(Algorithm::Recursive, &product, elapsed);
        Some(product)
    } else {
        None
    };

    let strassen = if config.algorithm.runs_strassen() {
        let start = Instant::now();
        let product = (&a * &b)?;
        let elapsed = start.elapsed();
        info!("strassen multiply of size {} took {:?}", config.size, elapsed);
        reporter.report_product(Algorithm::Strassen, &product, elapsed);
        Some(product)
    } else {
        None
    };

    if let (Some(r), Some(s)) = (&recursive, &strassen) {
        let agree = r == s;
        reporter.report_agreement(agree);
        if !agree {
            return Err(RunError::ProductsDiffer { size: config.size });
        }
    }

    Ok(RunSummary {
        a,
        b,
        recursive,
        strassen,
    })
}
