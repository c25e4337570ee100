//! Recursive block multiplication and Strassen's algorithm
//!
//! Both algorithms split each operand into four quadrants per level and bottom
//! out at a 1x1 scalar product, so recursion depth is `log2(size)`.
//!
//! ## Recursive block multiply
//!
//! Eight half-size products per level:
//!
//! ```text
//! R11 = A11·B11 + A12·B21    R12 = A11·B12 + A12·B22
//! R21 = A21·B11 + A22·B21    R22 = A21·B12 + A22·B22
//! ```
//!
//! ## Strassen
//!
//! Seven half-size products per level, paid for with extra additions:
//!
//! ```text
//! P1 = A11·(B12 − B22)          P5 = (A11 + A22)·(B11 + B22)
//! P2 = (A11 + A12)·B22          P6 = (A12 − A22)·(B21 + B22)
//! P3 = (A21 + A22)·B11          P7 = (A11 − A21)·(B11 + B12)
//! P4 = A22·(B21 − B11)
//!
//! R11 = P5 + P4 − P2 + P6       R12 = P1 + P2
//! R21 = P3 + P4                 R22 = P5 + P1 − P3 − P7
//! ```
//!
//! The chained sums are evaluated left to right. Element arithmetic wraps
//! modulo 2^32: intermediate Strassen sums can leave the `i32` range even when
//! the product does not, and wrapping keeps the final result exact in that case.
//!
//! Every level allocates fresh quadrants and intermediate sums, so peak memory
//! is the sum of live sub-matrices along the active call stack.

use crate::matrix::{Matrix, MatrixResult};
use log::{debug, trace};

/// Multiply two equal-size matrices with the eight-product recursion
pub fn multiply(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    a.check_same_size(b, "multiply")?;
    debug!("recursive multiply: size {}", a.size());
    multiply_recursive(a, b)
}

/// Multiply two equal-size matrices with Strassen's seven-product recursion
pub fn strassen(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    a.check_same_size(b, "multiply")?;
    debug!("strassen multiply: size {}", a.size());
    strassen_recursive(a, b)
}

/// Textbook triple-loop product, used as an independent check
///
/// Like the elementwise ops, sums and products wrap modulo 2^32.
pub fn reference_product(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    a.check_same_size(b, "multiply")?;
    let n = a.size();
    let (lhs, rhs) = (a.as_slice(), b.as_slice());

    let mut data = vec![0; n * n];
    for i in 0..n {
        for j in 0..n {
            data[i * n + j] = (0..n).fold(0i32, |acc, k| {
                acc.wrapping_add(lhs[i * n + k].wrapping_mul(rhs[k * n + j]))
            });
        }
    }

    Matrix::from_vec(n, data)
}

/// 1x1 product
fn scalar_product(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    let mut result = Matrix::zeros(1)?;
    result.set(0, 0, a.get(0, 0)?.wrapping_mul(b.get(0, 0)?))?;
    Ok(result)
}

fn multiply_recursive(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    let size = a.size();
    if size == 1 {
        return scalar_product(a, b);
    }
    trace!("multiply level: size {}", size);

    let [a11, a12, a21, a22] = a.split()?;
    let [b11, b12, b21, b22] = b.split()?;

    let r11 = (&multiply_recursive(&a11, &b11)? + &multiply_recursive(&a12, &b21)?)?;
    let r12 = (&multiply_recursive(&a11, &b12)? + &multiply_recursive(&a12, &b22)?)?;
    let r21 = (&multiply_recursive(&a21, &b11)? + &multiply_recursive(&a22, &b21)?)?;
    let r22 = (&multiply_recursive(&a21, &b12)? + &multiply_recursive(&a22, &b22)?)?;

    let mut result = Matrix::zeros(size)?;
    result.combine(&r11, &r12, &r21, &r22)?;
    Ok(result)
}

fn strassen_recursive(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    let size = a.size();
    if size == 1 {
        return multiply_recursive(a, b);
    }
    trace!("strassen level: size {}", size);

    let [a11, a12, a21, a22] = a.split()?;
    let [b11, b12, b21, b22] = b.split()?;

    let p1 = strassen_recursive(&a11, &(&b12 - &b22)?)?;
    let p2 = strassen_recursive(&(&a11 + &a12)?, &b22)?;
    let p3 = strassen_recursive(&(&a21 + &a22)?, &b11)?;
    let p4 = strassen_recursive(&a22, &(&b21 - &b11)?)?;
    let p5 = strassen_recursive(&(&a11 + &a22)?, &(&b11 + &b22)?)?;
    let p6 = strassen_recursive(&(&a12 - &a22)?, &(&b21 + &b22)?)?;
    let p7 = strassen_recursive(&(&a11 - &a21)?, &(&b11 + &b12)?)?;

    let r11 = (&(&(&p5 + &p4)? - &p2)? + &p6)?;
    let r12 = (&p1 + &p2)?;
    let r21 = (&p3 + &p4)?;
    let r22 = (&(&(&p5 + &p1)? - &p3)? - &p7)?;

    let mut result = Matrix::zeros(size)?;
    result.combine(&r11, &r12, &r21, &r22)?;
    Ok(result)
}
