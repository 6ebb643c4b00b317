//! Vector norms and matrix-vector products
//!
//! Small helpers used by callers and by the solver's residual check.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use ndarray::{Array1, ArrayView1};

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm(x: ArrayView1<'_, f64>) -> f64 {
    vector_norm_sqr(x).sqrt()
}

/// Compute vector norm squared: ||x||_2^2 = Σ x_i^2
///
/// Avoids the square root when only comparisons are needed.
#[inline]
pub fn vector_norm_sqr(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Compute the 1-norm: Σ |x_i|
#[inline]
pub fn norm_l1(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().map(|xi| xi.abs()).sum()
}

/// Compute the max-norm: max |x_i| (0 for an empty vector)
#[inline]
pub fn norm_inf(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().fold(0.0_f64, |acc, xi| acc.max(xi.abs()))
}

/// Compute y = A * x
pub fn mat_vec(a: &Matrix, x: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
    if a.cols() != x.len() {
        return Err(MatrixError::DimensionMismatch {
            operation: "mat_vec",
            left: a.shape(),
            right: (x.len(), 1),
        });
    }
    Ok(a.as_array().dot(&x))
}
