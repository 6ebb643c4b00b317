//! Plain-text matrix files
//!
//! One matrix row per line. Values are separated by commas, whitespace, or
//! both (`1, 2, 3`, `1 2 3` and `1,2,3` all read the same). Blank lines and
//! lines starting with `#` are skipped. Every row must hold the same number
//! of values.
//!
//! The writer emits space-separated values using Rust's shortest
//! round-trip formatting for `f64`, so a written file reads back to exactly
//! the same matrix.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

/// Split `line` on `sep`, trimming each token and dropping empty ones
pub fn split(line: &str, sep: char) -> Vec<String> {
    line.split(sep)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a single decimal value
///
/// Surrounding whitespace is ignored. `line` and `column` are 1-based and
/// only used to locate the error.
pub fn string_to_double(token: &str, line: usize, column: usize) -> Result<f64> {
    token.trim().parse::<f64>().map_err(|_| MatrixError::Parse {
        line,
        column,
        token: token.trim().to_string(),
    })
}

/// Parse a matrix from its text representation
pub fn parse_matrix(content: &str) -> Result<Matrix> {
    let mut values = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // commas, tabs and runs of spaces all collapse to one separator
        let normalized = trimmed.replace(|c: char| c == ',' || c.is_whitespace(), " ");
        let tokens = split(&normalized, ' ');
        for (col_index, token) in tokens.iter().enumerate() {
            values.push(string_to_double(token, line_no, col_index + 1)?);
        }
        let got = tokens.len();

        if rows == 0 {
            cols = got;
        } else if got != cols {
            return Err(MatrixError::RaggedRow {
                line: line_no,
                expected: cols,
                got,
            });
        }
        rows += 1;
    }

    Matrix::from_row_major(rows, cols, values)
}

/// Read a matrix from a text file
pub fn read_matrix_from_file<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let matrix = parse_matrix(&content)?;
    log::debug!(
        "Read {}x{} matrix from {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(matrix)
}

/// Render a matrix in the text format read by [`parse_matrix`]
pub fn format_matrix(matrix: &Matrix) -> String {
    let mut out = String::new();
    for i in 0..matrix.rows() {
        for (j, value) in matrix.row(i).iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            // writing to a String cannot fail
            let _ = write!(out, "{}", value);
        }
        out.push('\n');
    }
    out
}

/// Write a matrix to a text file, replacing any existing content
pub fn write_matrix_to_file<P: AsRef<Path>>(matrix: &Matrix, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_matrix(matrix))?;
    log::debug!(
        "Wrote {}x{} matrix to {}",
        matrix.rows(),
        matrix.cols(),
        path.display()
    );
    Ok(())
}
