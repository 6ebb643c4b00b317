//! Elementary row operations on an augmented system `[A | b]`
//!
//! The free functions act on a single half (a matrix row or the right-hand
//! side). [`AugmentedSystem`] pairs them so that every swap, scaling and
//! elimination hits the matrix row and its right-hand-side entry with the
//! same coefficient in one call.

use super::pivot::partial_pivot;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use ndarray::{Array1, ArrayView1, ArrayViewMut1, Zip};

/// Exchange the entries of two rows in place
///
/// Panics if the rows differ in length.
pub fn change_rows(mut first: ArrayViewMut1<'_, f64>, mut second: ArrayViewMut1<'_, f64>) {
    Zip::from(&mut first)
        .and(&mut second)
        .for_each(std::mem::swap);
}

/// Exchange two right-hand-side entries
pub fn change_rows_rhs(rhs: &mut Array1<f64>, first: usize, second: usize) {
    rhs.swap(first, second);
}

/// Scale `row` so that its entry at `pivot_col` becomes exactly 1
///
/// Returns the multiplier `1 / pivot` that was applied. The pivot must be
/// nonzero; [`AugmentedSystem::normalize_pivot`] checks that first.
pub fn make_pivot_one(mut row: ArrayViewMut1<'_, f64>, pivot_col: usize) -> f64 {
    let multiplier = 1.0 / row[pivot_col];
    row.mapv_inplace(|v| v * multiplier);
    row[pivot_col] = 1.0;
    multiplier
}

/// Scale one right-hand-side entry: `rhs[position] *= multiplier`
pub fn modify_rhs(rhs: &mut Array1<f64>, multiplier: f64, position: usize) {
    rhs[position] *= multiplier;
}

/// Zero `target_row[pivot_col]` by subtracting a multiple of the normalized pivot row
///
/// The multiplier is the target's own entry in the pivot column; it is
/// returned so the same combination can be applied to the right-hand side.
pub fn reduce_column(
    pivot_row: ArrayView1<'_, f64>,
    mut target_row: ArrayViewMut1<'_, f64>,
    pivot_col: usize,
) -> f64 {
    let multiplier = target_row[pivot_col];
    target_row.scaled_add(-multiplier, &pivot_row);
    target_row[pivot_col] = 0.0;
    multiplier
}

/// Apply an elimination step to the right-hand side: `rhs[target] -= multiplier * rhs[pivot]`
pub fn reduce_rhs(rhs: &mut Array1<f64>, multiplier: f64, pivot: usize, target: usize) {
    rhs[target] -= multiplier * rhs[pivot];
}

/// A square matrix and its right-hand side, mutated together
///
/// Borrowing both buffers mutably for the lifetime of the system guarantees
/// nothing else can touch one half without the other.
#[derive(Debug)]
pub struct AugmentedSystem<'a> {
    matrix: &'a mut Matrix,
    rhs: &'a mut Array1<f64>,
}

impl<'a> AugmentedSystem<'a> {
    /// Pair a square matrix with a right-hand side of matching length
    pub fn new(matrix: &'a mut Matrix, rhs: &'a mut Array1<f64>) -> Result<Self> {
        if !matrix.is_square() {
            return Err(MatrixError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        if rhs.len() != matrix.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: "augment",
                left: matrix.shape(),
                right: (rhs.len(), 1),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// Dimension `n` of the `n x n` system
    pub fn dim(&self) -> usize {
        self.matrix.rows()
    }

    /// Current state of the matrix half
    pub fn matrix(&self) -> &Matrix {
        &*self.matrix
    }

    /// Current state of the right-hand side
    pub fn rhs(&self) -> &Array1<f64> {
        &*self.rhs
    }

    /// Row at or below `k` with the largest magnitude in column `k`
    pub fn select_pivot(&self, k: usize) -> usize {
        partial_pivot(self.matrix.column(k), k)
    }

    /// Swap rows `i` and `j` of both halves; a no-op when `i == j`
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (first, second) = self.matrix.row_pair_mut(i, j);
        change_rows(first, second);
        change_rows_rhs(self.rhs, i, j);
    }

    /// Scale row `k` so the pivot `A[k][k]` becomes 1, and `b[k]` by the same factor
    ///
    /// Fails with [`MatrixError::SingularMatrix`] before any write when the
    /// pivot is not finite or `|pivot| <= tolerance`. Returns the multiplier.
    pub fn normalize_pivot(&mut self, k: usize, tolerance: f64) -> Result<f64> {
        let pivot = self.matrix[(k, k)];
        if !pivot.is_finite() || pivot.abs() <= tolerance {
            return Err(MatrixError::SingularMatrix {
                pivot_index: k,
                pivot_value: pivot,
            });
        }
        let multiplier = make_pivot_one(self.matrix.row_mut(k), k);
        modify_rhs(self.rhs, multiplier, k);
        Ok(multiplier)
    }

    /// Zero column `pivot` of row `target` using the normalized pivot row
    ///
    /// Returns the multiplier applied to both halves.
    ///
    /// # Panics
    ///
    /// Panics if `pivot == target`.
    pub fn eliminate(&mut self, pivot: usize, target: usize) -> f64 {
        assert_ne!(pivot, target, "cannot eliminate the pivot row against itself");
        let (pivot_row, target_row) = self.matrix.row_pair_mut(pivot, target);
        let multiplier = reduce_column(pivot_row.view(), target_row, pivot);
        reduce_rhs(self.rhs, multiplier, pivot, target);
        multiplier
    }
}
