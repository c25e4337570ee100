pub mod args;
pub mod config;
pub mod driver;
pub mod matrix;
pub mod multiply;
pub mod reporters;

pub use args::parse_args;
pub use matrix::{Matrix, MatrixError, MatrixResult, Quadrant};
pub use multiply::{multiply, reference_product, strassen};
