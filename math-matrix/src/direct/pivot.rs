//! Partial pivot selection

use ndarray::ArrayView1;

/// Find the row holding the largest-magnitude entry of `column` at or below `num_it`
///
/// Returns an absolute row index in `num_it..column.len()`. Ties resolve to the
/// lowest index, so an all-zero tail returns `num_it` itself; spotting the zero
/// pivot is left to the caller.
///
/// # Panics
///
/// Panics if `num_it >= column.len()`.
pub fn partial_pivot(column: ArrayView1<'_, f64>, num_it: usize) -> usize {
    assert!(
        num_it < column.len(),
        "pivot position {} out of range for column of length {}",
        num_it,
        column.len()
    );

    let mut max_val = column[num_it].abs();
    let mut max_row = num_it;

    for i in (num_it + 1)..column.len() {
        let val = column[i].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }

    max_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_picks_largest_magnitude() {
        let col = array![1.0, -5.0, 3.0];
        assert_eq!(partial_pivot(col.view(), 0), 1);
    }

    #[test]
    fn test_index_is_absolute() {
        let col = array![100.0, 1.0, 2.0, -4.0];
        // rows above num_it are ignored
        assert_eq!(partial_pivot(col.view(), 1), 3);
        assert_eq!(partial_pivot(col.view(), 3), 3);
    }

    #[test]
    fn test_ties_take_first() {
        let col = array![0.0, 2.0, -2.0, 2.0];
        assert_eq!(partial_pivot(col.view(), 0), 1);
    }

    #[test]
    fn test_all_zero_returns_current() {
        let col = array![7.0, 0.0, 0.0];
        assert_eq!(partial_pivot(col.view(), 1), 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range() {
        let col = array![1.0, 2.0];
        partial_pivot(col.view(), 2);
    }
}
