//! Quadrant extraction and reassembly
//!
//! [`Matrix::partition`] copies a half-size block out of a matrix and
//! [`Matrix::combine`] writes four half-size blocks back into one. Both copy
//! values; no matrix ever aliases another's storage.

use super::{Matrix, MatrixError, MatrixResult};

/// One of the four half-size blocks of a square matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in combine order (11, 12, 21, 22)
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Corner offset (row, col) of this quadrant in a matrix of `size`
    #[inline]
    pub const fn offset(self, size: usize) -> (usize, usize) {
        let half = size / 2;
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, half),
            Quadrant::BottomLeft => (half, 0),
            Quadrant::BottomRight => (half, half),
        }
    }
}

impl Matrix {
    /// Copy the `size/2` block whose top-left corner is (row_start, col_start)
    ///
    /// Offsets are not required to be quadrant-aligned, but the whole block
    /// must lie inside the matrix.
    pub fn partition(&self, row_start: usize, col_start: usize) -> MatrixResult<Matrix> {
        let half = self.size / 2;
        let mut sub = Matrix::zeros(half)?;

        for i in 0..half {
            let src = self.index(i + row_start, col_start)?;
            // Last column of the block must be in bounds too
            self.index(i + row_start, col_start + half - 1)?;
            let dst = i * half;
            sub.data[dst..dst + half].copy_from_slice(&self.data[src..src + half]);
        }

        Ok(sub)
    }

    /// Copy out one quadrant
    #[inline]
    pub fn quadrant(&self, quadrant: Quadrant) -> MatrixResult<Matrix> {
        let (row, col) = quadrant.offset(self.size);
        self.partition(row, col)
    }

    /// Copy out all four quadrants as (11, 12, 21, 22)
    pub fn split(&self) -> MatrixResult<[Matrix; 4]> {
        Ok([
            self.quadrant(Quadrant::TopLeft)?,
            self.quadrant(Quadrant::TopRight)?,
            self.quadrant(Quadrant::BottomLeft)?,
            self.quadrant(Quadrant::BottomRight)?,
        ])
    }

    /// Overwrite this matrix with four half-size quadrants
    ///
    /// Element (i, j) is taken from `r11`, `r12`, `r21` or `r22` depending on
    /// which side of the midpoint `i` and `j` fall. This is the inverse of
    /// [`Matrix::split`].
    pub fn combine(
        &mut self,
        r11: &Matrix,
        r12: &Matrix,
        r21: &Matrix,
        r22: &Matrix,
    ) -> MatrixResult<()> {
        let half = self.size / 2;
        for quadrant in [r11, r12, r21, r22] {
            if half == 0 || quadrant.size != half {
                return Err(MatrixError::SizeMismatch {
                    op: "combine",
                    left: self.size,
                    right: quadrant.size,
                });
            }
        }

        let size = self.size;
        for i in 0..half {
            let top = i * size;
            let bottom = (i + half) * size;
            let src = i * half;

            self.data[top..top + half].copy_from_slice(&r11.data[src..src + half]);
            self.data[top + half..top + size].copy_from_slice(&r12.data[src..src + half]);
            self.data[bottom..bottom + half].copy_from_slice(&r21.data[src..src + half]);
            self.data[bottom + half..bottom + size].copy_from_slice(&r22.data[src..src + half]);
        }

        Ok(())
    }

    /// Build a new matrix from four quadrants
    pub fn from_quadrants(
        r11: &Matrix,
        r12: &Matrix,
        r21: &Matrix,
        r22: &Matrix,
    ) -> MatrixResult<Matrix> {
        let mut result = Matrix::zeros(r11.size * 2)?;
        result.combine(r11, r12, r21, r22)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(size: usize) -> Matrix {
        Matrix::from_vec(size, (1..=(size * size) as i32).collect()).unwrap()
    }

    #[test]
    fn test_quadrant_offsets() {
        assert_eq!(Quadrant::TopLeft.offset(8), (0, 0));
        assert_eq!(Quadrant::TopRight.offset(8), (0, 4));
        assert_eq!(Quadrant::BottomLeft.offset(8), (4, 0));
        assert_eq!(Quadrant::BottomRight.offset(8), (4, 4));
    }

    #[test]
    fn test_partition_quadrants() {
        let m = counting(4);
        let [q11, q12, q21, q22] = m.split().unwrap();
        assert_eq!(q11.to_rows(), vec![vec![1, 2], vec![5, 6]]);
        assert_eq!(q12.to_rows(), vec![vec![3, 4], vec![7, 8]]);
        assert_eq!(q21.to_rows(), vec![vec![9, 10], vec![13, 14]]);
        assert_eq!(q22.to_rows(), vec![vec![11, 12], vec![15, 16]]);
    }

    #[test]
    fn test_partition_unaligned_offset() {
        let m = counting(4);
        let centre = m.partition(1, 1).unwrap();
        assert_eq!(centre.to_rows(), vec![vec![6, 7], vec![10, 11]]);
    }

    #[test]
    fn test_partition_out_of_range() {
        let m = counting(4);
        assert!(matches!(
            m.partition(3, 0),
            Err(MatrixError::OutOfRange { .. })
        ));
        assert!(matches!(
            m.partition(0, 3),
            Err(MatrixError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_partition_size_one_fails() {
        let m = Matrix::from_vec(1, vec![7]).unwrap();
        assert_eq!(m.partition(0, 0), Err(MatrixError::NotPowerOfTwo { size: 0 }));
    }

    #[test]
    fn test_combine_round_trip() {
        let m = counting(8);
        let [q11, q12, q21, q22] = m.split().unwrap();
        let mut rebuilt = Matrix::zeros(8).unwrap();
        rebuilt.combine(&q11, &q12, &q21, &q22).unwrap();
        assert_eq!(rebuilt, m);
        assert_eq!(Matrix::from_quadrants(&q11, &q12, &q21, &q22).unwrap(), m);
    }

    #[test]
    fn test_combine_rejects_wrong_sizes() {
        let small = Matrix::zeros(1).unwrap();
        let large = Matrix::zeros(2).unwrap();
        let mut target = Matrix::zeros(4).unwrap();
        let err = target.combine(&large, &large, &small, &large).unwrap_err();
        assert_eq!(
            err,
            MatrixError::SizeMismatch {
                op: "combine",
                left: 4,
                right: 1
            }
        );
        // Receiver untouched
        assert!(target.as_slice().iter().all(|&v| v == 0));

        let mut scalar = Matrix::zeros(1).unwrap();
        assert!(scalar.combine(&small, &small, &small, &small).is_err());
    }
}
