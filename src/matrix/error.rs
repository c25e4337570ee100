//! Error types for matrix operations

use thiserror::Error;

/// Errors that can occur while building or combining matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Matrix size is zero or not a power of two
    #[error("Matrix size must be a power of 2, got {size}")]
    NotPowerOfTwo { size: usize },

    /// Operands of a binary operation have different sizes
    #[error("Cannot {op} matrices of different size ({left} vs {right})")]
    SizeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    /// Backing data does not hold exactly size * size elements
    #[error("Matrix of size {size} needs {expected} elements, got {len}")]
    DataLength {
        size: usize,
        expected: usize,
        len: usize,
    },

    /// size * size elements cannot be addressed or allocated
    #[error("Matrix size {size} is too large to allocate")]
    TooLarge { size: usize },

    /// A row passed to `Matrix::from_rows` has the wrong length
    #[error("Row {row} has {len} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        len: usize,
    },

    /// Element access outside the backing storage
    #[error("Index ({row}, {col}) out of range for matrix of size {size}")]
    OutOfRange { row: usize, col: usize, size: usize },
}

impl MatrixError {
    /// True for the errors a caller can fix by passing different input
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, MatrixError::OutOfRange { .. })
    }
}

/// Type alias for matrix results
pub type MatrixResult<T> = Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatrixError::NotPowerOfTwo { size: 3 };
        assert_eq!(err.to_string(), "Matrix size must be a power of 2, got 3");

        let err = MatrixError::SizeMismatch {
            op: "add",
            left: 2,
            right: 4,
        };
        assert_eq!(
            err.to_string(),
            "Cannot add matrices of different size (2 vs 4)"
        );

        let err = MatrixError::DataLength {
            size: 2,
            expected: 4,
            len: 3,
        };
        assert_eq!(err.to_string(), "Matrix of size 2 needs 4 elements, got 3");

        let err = MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            len: 3,
        };
        assert_eq!(err.to_string(), "Row 1 has 3 elements, expected 2");
    }

    #[test]
    fn test_error_kinds() {
        assert!(MatrixError::NotPowerOfTwo { size: 0 }.is_invalid_argument());
        assert!(MatrixError::DataLength {
            size: 2,
            expected: 4,
            len: 1
        }
        .is_invalid_argument());
        assert!(MatrixError::TooLarge { size: 1 << 33 }.is_invalid_argument());
        assert!(MatrixError::RaggedRows {
            row: 0,
            expected: 2,
            len: 1
        }
        .is_invalid_argument());
        assert!(!MatrixError::OutOfRange {
            row: 2,
            col: 0,
            size: 2
        }
        .is_invalid_argument());
    }
}
