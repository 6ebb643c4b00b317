//! Error types for matrix operations.
//!
//! Every fallible operation in this crate returns [`MatrixError`], so callers
//! can tell a shape problem from a singular system from a bad input file.

use thiserror::Error;

/// Errors that can occur while building, combining, solving or loading matrices.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A matrix was requested with zero rows or zero columns.
    #[error("empty matrix: {rows}x{cols} (rows and cols must be > 0)")]
    EmptyMatrix {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Operands have incompatible shapes.
    #[error("dimension mismatch in {operation}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Name of the operation that rejected the operands
        operation: &'static str,
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },

    /// The solver was given a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Elimination hit a zero (or below-tolerance) pivot: no unique solution.
    #[error("singular system: pivot {pivot_index} is {pivot_value:e}, no unique solution")]
    SingularMatrix {
        /// Pivot position at which elimination stopped
        pivot_index: usize,
        /// Value found at that pivot after row selection
        pivot_value: f64,
    },

    /// A field of a matrix file could not be read as a number.
    #[error("parse error at line {line}, column {column}: cannot read {token:?} as a number")]
    Parse {
        /// 1-based line number
        line: usize,
        /// 1-based field number within the line
        column: usize,
        /// The offending text
        token: String,
    },

    /// A row of a matrix file has a different length than the first row.
    #[error("ragged row at line {line}: expected {expected} values, got {got}")]
    RaggedRow {
        /// 1-based line number
        line: usize,
        /// Number of values in the first row
        expected: usize,
        /// Number of values in this row
        got: usize,
    },

    /// IO error while reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// Configuration file extension is neither `.json` nor `.toml`.
    #[error("unsupported config format: {0}")]
    UnsupportedConfigFormat(String),
}

/// A specialized `Result` type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `EmptyMatrix`, `DimensionMismatch` and `NotSquare`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            MatrixError::EmptyMatrix { .. }
                | MatrixError::DimensionMismatch { .. }
                | MatrixError::NotSquare { .. }
        )
    }

    /// Returns `true` if the system has no unique solution.
    pub fn is_singular(&self) -> bool {
        matches!(self, MatrixError::SingularMatrix { .. })
    }

    /// Returns `true` if this is a malformed-input error.
    ///
    /// This includes `Parse` and `RaggedRow`.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            MatrixError::Parse { .. } | MatrixError::RaggedRow { .. }
        )
    }
}
