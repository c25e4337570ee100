//! Square power-of-two matrices with flat row-major storage
//!
//! A [`Matrix`] owns a contiguous `Vec<i32>` of `size * size` elements. Element
//! (r, c) lives at offset `r * size + c`. Every constructor validates that the
//! size is a power of two, so partition, combine, and the multiply routines in
//! [`crate::multiply`] can halve the size at each recursion level without
//! re-checking it.
//!
//! Matrices are values: arithmetic and [`Matrix::partition`] always allocate a
//! new matrix. [`Matrix::combine`] is the only operation that writes into an
//! existing buffer.

mod error;
mod ops;
mod partition;

pub use error::{MatrixError, MatrixResult};
pub use partition::Quadrant;

use rand::Rng;
use std::fmt;

/// Lower bound (inclusive) for randomly generated elements
pub const RANDOM_MIN: i32 = -9;
/// Upper bound (inclusive) for randomly generated elements
pub const RANDOM_MAX: i32 = 9;

/// Column width used by the `Display` implementation
const DISPLAY_WIDTH: usize = 4;

/// Exact power-of-two test; zero is rejected
#[inline]
pub const fn is_power_of_two(size: usize) -> bool {
    size > 0 && (size & (size - 1)) == 0
}

/// Number of elements in a `size` x `size` matrix, if it can be allocated
fn element_count(size: usize) -> MatrixResult<usize> {
    size
        .checked_mul(size)
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<i32>())
        .ok_or(MatrixError::TooLarge { size })
}

/// Validate `size` and return its element count
fn checked_len(size: usize) -> MatrixResult<usize> {
    if !is_power_of_two(size) {
        return Err(MatrixError::NotPowerOfTwo { size });
    }
    element_count(size)
}

/// Square matrix of `i32` whose size is a power of two
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Create a matrix of `size` x `size`, zero-filled or randomized
    pub fn new(size: usize, randomize: bool) -> MatrixResult<Self> {
        let mut matrix = Self::zeros(size)?;
        if randomize {
            matrix.randomize();
        }
        Ok(matrix)
    }

    /// Create a zero matrix
    ///
    /// Fails with [`MatrixError::TooLarge`] when the buffer cannot be
    /// reserved, instead of aborting on allocation.
    pub fn zeros(size: usize) -> MatrixResult<Self> {
        let len = checked_len(size)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| MatrixError::TooLarge { size })?;
        data.resize(len, 0);
        Ok(Self { size, data })
    }

    /// Create a matrix filled from the thread-local RNG
    pub fn random(size: usize) -> MatrixResult<Self> {
        Self::new(size, true)
    }

    /// Create a matrix filled from the given RNG (useful for seeded runs)
    pub fn random_with<R: Rng>(size: usize, rng: &mut R) -> MatrixResult<Self> {
        let mut matrix = Self::zeros(size)?;
        matrix.randomize_with(rng);
        Ok(matrix)
    }

    /// Create the identity matrix
    pub fn identity(size: usize) -> MatrixResult<Self> {
        let mut matrix = Self::zeros(size)?;
        for i in 0..size {
            matrix.data[i * size + i] = 1;
        }
        Ok(matrix)
    }

    /// Wrap an existing row-major buffer
    pub fn from_vec(size: usize, data: Vec<i32>) -> MatrixResult<Self> {
        let expected = checked_len(size)?;
        if data.len() != expected {
            return Err(MatrixError::DataLength {
                size,
                expected,
                len: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Build a matrix from a list of rows; the row count defines the size
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> MatrixResult<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(element_count(size)?);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: size,
                    len: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(size, data)
    }

    /// Refill every element uniformly from [`RANDOM_MIN`, `RANDOM_MAX`]
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Refill every element from the given RNG
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for value in self.data.iter_mut() {
            *value = rng.random_range(RANDOM_MIN..=RANDOM_MAX);
        }
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of the backing storage
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Linear offset of (row, col) in the backing storage
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> MatrixResult<usize> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(MatrixError::OutOfRange {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Get element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<i32> {
        let i = self.index(row, col)?;
        Ok(self.data[i])
    }

    /// Set element at (row, col)
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> MatrixResult<()> {
        let i = self.index(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Copy out the rows as nested vectors
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.data.chunks(self.size).map(<[i32]>::to_vec).collect()
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks(self.size)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for value in row {
                write!(f, "{:>width$} ", value, width = DISPLAY_WIDTH)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
