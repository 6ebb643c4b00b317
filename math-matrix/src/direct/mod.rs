//! Direct solver for dense linear systems
//!
//! Gauss-Jordan elimination with partial pivoting, built from:
//! - [`partial_pivot`]: pick the largest-magnitude candidate in a column
//! - [`AugmentedSystem`]: row operations applied to matrix and right-hand side together
//! - [`reduce`]: the driver that brings `[A | b]` to `[I | x]`

mod pivot;
mod reduce;
mod row_ops;

pub use pivot::partial_pivot;
pub use reduce::{ReduceReport, Solution, reduce, reduce_with_config, solve};
pub use row_ops::{
    AugmentedSystem, change_rows, change_rows_rhs, make_pivot_one, modify_rhs, reduce_column,
    reduce_rhs,
};
