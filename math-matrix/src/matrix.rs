//! Dense row-major matrix storage
//!
//! [`Matrix`] owns a contiguous `f64` buffer in row-major (C) order together
//! with its shape, so every operation can check compatibility before it
//! touches the data.

use crate::error::{MatrixError, Result};
use ndarray::{Array2, ArrayView1, ArrayViewMut1, s};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense `rows x cols` matrix of `f64` values stored in row-major order.
///
/// Both dimensions are always greater than zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// Allocate a zero-filled `rows x cols` matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_shape(rows, cols)?;
        Ok(Self {
            data: Array2::zeros((rows, cols)),
        })
    }

    /// Allocate the `n x n` identity matrix
    pub fn identity(n: usize) -> Result<Self> {
        check_shape(n, n)?;
        Ok(Self {
            data: Array2::eye(n),
        })
    }

    /// Build a matrix from a flat row-major buffer
    ///
    /// The buffer must hold exactly `rows * cols` values.
    pub fn from_row_major(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        check_shape(rows, cols)?;
        let len = values.len();
        let data = Array2::from_shape_vec((rows, cols), values).map_err(|_| {
            MatrixError::DimensionMismatch {
                operation: "from_row_major",
                left: (rows, cols),
                right: (1, len),
            }
        })?;
        Ok(Self { data })
    }

    /// Build a matrix from a slice of rows, all of the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        check_shape(num_rows, num_cols)?;

        let mut values = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(MatrixError::DimensionMismatch {
                    operation: "from_rows",
                    left: (1, num_cols),
                    right: (1, row.len()),
                });
            }
            values.extend_from_slice(row);
        }
        Self::from_row_major(num_rows, num_cols, values)
    }

    /// Wrap an existing ndarray matrix
    ///
    /// Non-standard layouts (e.g. transposed views turned owned) are copied
    /// into row-major order.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        check_shape(data.nrows(), data.ncols())?;
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Shape as `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Check if the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Entry at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// View of row `i`
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// View of column `k`
    pub fn column(&self, k: usize) -> ArrayView1<'_, f64> {
        self.data.column(k)
    }

    /// Borrow the underlying ndarray
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the matrix and return the underlying ndarray
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Copy the entries out in row-major order
    pub fn to_row_major_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Check whether every entry is within `tol` of the matching entry in `other`
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Mutable view of row `i`
    pub(crate) fn row_mut(&mut self, i: usize) -> ArrayViewMut1<'_, f64> {
        self.data.row_mut(i)
    }

    /// Disjoint mutable views of rows `i` and `j`
    ///
    /// Panics if `i == j`.
    pub(crate) fn row_pair_mut(
        &mut self,
        i: usize,
        j: usize,
    ) -> (ArrayViewMut1<'_, f64>, ArrayViewMut1<'_, f64>) {
        self.data.multi_slice_mut((s![i, ..], s![j, ..]))
    }

    pub(crate) fn array_mut(&mut self) -> &mut Array2<f64> {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index]
    }
}

/// One row per line, entries separated by tabs.
///
/// A precision (`{:.3}`) is applied to every entry.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{:.*}", precision, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Print a matrix to stdout
pub fn print_matrix(matrix: &Matrix) {
    print!("{}", matrix);
}

fn check_shape(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyMatrix { rows, cols });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zeros_shape() {
        let m = Matrix::zeros(2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        assert!(m.to_row_major_vec().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            Matrix::zeros(0, 3),
            Err(MatrixError::EmptyMatrix { rows: 0, cols: 3 })
        ));
        assert!(Matrix::from_rows(&[]).is_err());
    }

    #[test]
    fn test_from_row_major_is_row_major() {
        let m = Matrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1).to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.column(1).to_vec(), vec![2.0, 5.0]);
    }

    #[test]
    fn test_from_row_major_wrong_length() {
        let err = Matrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DimensionMismatch {
                operation: "from_rows",
                ..
            }
        ));
    }

    #[test]
    fn test_from_array_transposed_layout() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let t = a.t().to_owned();
        let m = Matrix::from_array(t).unwrap();
        assert_eq!(m.to_row_major_vec(), vec![1.0, 3.0, 2.0, 4.0]);
        assert!(m.as_array().is_standard_layout());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3).unwrap();
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(1, 2)], 0.0);
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn test_row_pair_mut() {
        let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let (mut r0, r1) = m.row_pair_mut(0, 1);
        r0 += &r1;
        assert_eq!(m.row(0).to_vec(), vec![4.0, 6.0]);
    }

    #[test]
    fn test_display_precision() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(format!("{:.1}", m), "1.0\t2.0\n3.0\t4.0\n");
        assert_eq!(format!("{}", m), "1\t2\n3\t4\n");
    }
}
