//! Elementwise and matrix-product arithmetic
//!
//! Every function checks shapes before allocating its result and returns a
//! fresh [`Matrix`]; operands are never modified.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use std::ops::{Add, Mul, Sub};

/// Compute `a + b` for two matrices of the same shape
pub fn sum_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_shape("sum_matrices", a, b)?;
    Matrix::from_array(a.as_array() + b.as_array())
}

/// Compute `a - b` for two matrices of the same shape
pub fn subtract_matrices(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_shape("subtract_matrices", a, b)?;
    Matrix::from_array(a.as_array() - b.as_array())
}

/// Multiply every entry by `scalar`
pub fn scalar_product(a: &Matrix, scalar: f64) -> Matrix {
    let mut result = a.clone();
    result.array_mut().mapv_inplace(|v| v * scalar);
    result
}

/// Product of two square matrices of the same dimension
pub fn square_mat_mult(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if !b.is_square() {
        return Err(MatrixError::NotSquare {
            rows: b.rows(),
            cols: b.cols(),
        });
    }
    check_same_shape("square_mat_mult", a, b)?;
    mat_multiplication(a, b)
}

/// General product of an `m x n` matrix with an `n x k` matrix
pub fn mat_multiplication(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            operation: "mat_multiplication",
            left: a.shape(),
            right: b.shape(),
        });
    }

    Matrix::from_array(a.as_array().dot(b.as_array()))
}

fn check_same_shape(operation: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            operation,
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

/// Panics on shape mismatch; use [`sum_matrices`] for a checked version.
impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        match sum_matrices(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Panics on shape mismatch; use [`subtract_matrices`] for a checked version.
impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        match subtract_matrices(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        scalar_product(self, rhs)
    }
}

/// Panics on shape mismatch; use [`mat_multiplication`] for a checked version.
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        match mat_multiplication(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}
