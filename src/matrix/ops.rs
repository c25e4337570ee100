//! Elementwise arithmetic and operator overloads
//!
//! Operators are implemented on references and return [`MatrixResult`], since
//! every binary operation can fail with a size mismatch:
//!
//! ```
//! use strassen::Matrix;
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
//! let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
//! let c = (&a * &b).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//! ```

use super::{Matrix, MatrixError, MatrixResult};
use std::ops::{Add, Mul, Sub};

impl Matrix {
    /// Pairwise sum of two equal-size matrices
    ///
    /// Arithmetic wraps modulo 2^32, so Strassen's intermediate sums may
    /// overflow while the final product is still exact whenever it fits.
    pub fn add(&self, other: &Matrix) -> MatrixResult<Matrix> {
        self.zip_with(other, "add", i32::wrapping_add)
    }

    /// Pairwise difference of two equal-size matrices (wrapping)
    pub fn subtract(&self, other: &Matrix) -> MatrixResult<Matrix> {
        self.zip_with(other, "subtract", i32::wrapping_sub)
    }

    /// Ensure `other` has the same size as `self`
    #[inline]
    pub(crate) fn check_same_size(&self, other: &Matrix, op: &'static str) -> MatrixResult<()> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(MatrixError::SizeMismatch {
                op,
                left: self.size,
                right: other.size,
            })
        }
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> MatrixResult<Matrix>
    where
        F: Fn(i32, i32) -> i32,
    {
        self.check_same_size(other, op)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            size: self.size,
            data,
        })
    }
}

impl Add for &Matrix {
    type Output = MatrixResult<Matrix>;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = MatrixResult<Matrix>;

    fn sub(self, rhs: &Matrix) -> Self::Output {
        self.subtract(rhs)
    }
}

// Multiplication is Strassen's algorithm
impl Mul for &Matrix {
    type Output = MatrixResult<Matrix>;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        crate::multiply::strassen(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract() {
        let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let b = Matrix::from_rows(&[[10, -20], [30, -40]]).unwrap();

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.to_rows(), vec![vec![11, -18], vec![33, -36]]);

        let diff = (&a - &b).unwrap();
        assert_eq!(diff.to_rows(), vec![vec![-9, 22], vec![-27, 44]]);

        assert_eq!(a.add(&b).unwrap(), sum);
        assert_eq!(a.subtract(&b).unwrap(), diff);
    }

    #[test]
    fn test_inputs_untouched() {
        let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let b = a.clone();
        let _ = (&a + &b).unwrap();
        let _ = (&a - &b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_extreme_values_wrap() {
        let a = Matrix::from_rows(&[[i32::MAX, i32::MIN], [0, -1]]).unwrap();
        let b = Matrix::from_rows(&[[1, -1], [0, 0]]).unwrap();

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.to_rows(), vec![vec![i32::MIN, i32::MAX], vec![0, -1]]);
        assert_eq!((&sum - &b).unwrap(), a);
    }

    #[test]
    fn test_size_mismatch() {
        let a = Matrix::zeros(2).unwrap();
        let b = Matrix::zeros(4).unwrap();

        assert_eq!(
            &a + &b,
            Err(MatrixError::SizeMismatch {
                op: "add",
                left: 2,
                right: 4
            })
        );
        assert_eq!(
            &b - &a,
            Err(MatrixError::SizeMismatch {
                op: "subtract",
                left: 4,
                right: 2
            })
        );
        assert!(matches!(
            &a * &b,
            Err(MatrixError::SizeMismatch { op: "multiply", .. })
        ));
    }
}
