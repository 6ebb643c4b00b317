//! Dense matrices and a direct solver for linear equation systems
//!
//! This crate provides a small row-major dense matrix type, the usual
//! arithmetic on it, vector norms, a plain-text file format, and a
//! Gauss-Jordan solver with partial pivoting.
//!
//! # Features
//!
//! - **Storage**: [`Matrix`], an owning `rows x cols` buffer that always knows its shape
//! - **Arithmetic**: sum, subtraction, scalar product, matrix product, all shape-checked
//! - **Norms**: Euclidean, 1-norm and max-norm of vectors
//! - **Direct Solver**: [`reduce`] brings `[A | b]` to `[I | x]` in place; [`solve`] works on copies
//! - **File I/O**: read and write matrices as comma/whitespace separated text
//!
//! # Example
//!
//! ```
//! use math_audio_matrix::{Matrix, ReduceConfig, solve};
//! use ndarray::array;
//!
//! let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]])?;
//! let b = array![3.0, 5.0];
//!
//! let solution = solve(&a, &b, &ReduceConfig::default())?;
//! assert!((solution.x[0] - 0.8).abs() < 1e-12);
//! assert!((solution.x[1] - 1.4).abs() < 1e-12);
//! # Ok::<(), math_audio_matrix::MatrixError>(())
//! ```

pub mod arithmetic;
pub mod config;
pub mod direct;
pub mod error;
pub mod io;
pub mod matrix;
pub mod norms;

// Re-export main types
pub use config::{ConfigFormat, ReduceConfig};
pub use error::{MatrixError, Result};
pub use matrix::{Matrix, print_matrix};

// Re-export arithmetic and norms
pub use arithmetic::{
    mat_multiplication, scalar_product, square_mat_mult, subtract_matrices, sum_matrices,
};
pub use norms::{mat_vec, norm_inf, norm_l1, vector_norm, vector_norm_sqr};

// Re-export the direct solver
pub use direct::{
    AugmentedSystem, ReduceReport, Solution, partial_pivot, reduce, reduce_with_config, solve,
};

// Re-export file I/O
pub use io::{parse_matrix, read_matrix_from_file, write_matrix_to_file};
