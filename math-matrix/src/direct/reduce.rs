//! Gauss-Jordan elimination driver
//!
//! Brings the augmented system `[A | b]` to reduced row-echelon form `[I | x]`
//! in place. For each pivot position `k`:
//! 1. select the row at or below `k` with the largest `|A[i][k]|`
//! 2. swap it into position `k`
//! 3. scale row `k` so the pivot is 1
//! 4. eliminate column `k` from every other row, above and below
//!
//! A pivot is rejected as zero when `|pivot| <= n * f64::EPSILON * max|A_ij|`
//! (measured on the input), unless the configuration sets an explicit tolerance.

use super::row_ops::AugmentedSystem;
use crate::config::ReduceConfig;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::norms::{mat_vec, vector_norm};
use ndarray::Array1;

/// Bookkeeping from a successful reduction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReduceReport {
    /// Number of row exchanges performed by partial pivoting
    pub row_swaps: usize,
    /// Pivot values chosen at each position, before normalization
    pub pivots: Vec<f64>,
}

impl ReduceReport {
    /// Smallest pivot magnitude seen (infinity when no pivot was recorded)
    pub fn min_pivot_magnitude(&self) -> f64 {
        self.pivots
            .iter()
            .fold(f64::INFINITY, |acc, p| acc.min(p.abs()))
    }
}

/// Result of [`solve`]
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solution vector
    pub x: Array1<f64>,
    /// Relative residual ||A x - b|| / ||b|| against the original system
    /// (absolute residual when b = 0)
    pub residual: f64,
    /// Reduction bookkeeping
    pub report: ReduceReport,
}

/// Reduce `[matrix | rhs]` to `[I | x]` in place with default settings
///
/// See [`reduce_with_config`].
pub fn reduce(matrix: &mut Matrix, rhs: &mut Array1<f64>) -> Result<ReduceReport> {
    reduce_with_config(matrix, rhs, &ReduceConfig::default())
}

/// Reduce `[matrix | rhs]` to `[I | x]` in place
///
/// On success `matrix` is the identity and `rhs` holds the solution of the
/// original system. Shapes are checked before anything is written. If a
/// pivot is not finite, or within the pivot tolerance of zero (see
/// [`ReduceConfig::pivot_tolerance_for`]), the call returns
/// [`MatrixError::SingularMatrix`](crate::MatrixError::SingularMatrix) and both buffers are left part-way through elimination.
pub fn reduce_with_config(
    matrix: &mut Matrix,
    rhs: &mut Array1<f64>,
    config: &ReduceConfig,
) -> Result<ReduceReport> {
    let mut system = AugmentedSystem::new(matrix, rhs)?;
    let n = system.dim();
    let tolerance = config.pivot_tolerance_for(system.matrix());
    let mut report = ReduceReport {
        row_swaps: 0,
        pivots: Vec::with_capacity(n),
    };

    for k in 0..n {
        let best = system.select_pivot(k);
        if best != k {
            system.swap_rows(k, best);
            report.row_swaps += 1;
        }

        let pivot = system.matrix()[(k, k)];
        system
            .normalize_pivot(k, tolerance)
            .inspect_err(|_| {
                log::warn!(
                    "Singular system: pivot {} of {} is {:e} (tolerance {:e})",
                    k,
                    n,
                    pivot,
                    tolerance
                );
            })?;
        report.pivots.push(pivot);

        for i in 0..n {
            if i != k && system.matrix()[(i, k)] != 0.0 {
                system.eliminate(k, i);
            }
        }

        log::debug!(
            "Pivot {}: row {} selected, value = {:.6e}",
            k,
            best,
            pivot
        );
    }

    if config.verbosity > 0 {
        log::info!(
            "Gauss-Jordan reduction of {}x{} system: {} row swaps, min |pivot| = {:.3e}",
            n,
            n,
            report.row_swaps,
            report.min_pivot_magnitude()
        );
    }

    Ok(report)
}

/// Solve `a * x = b` without touching the inputs
///
/// Works on copies, then measures the residual against the original `a` and `b`.
pub fn solve(a: &Matrix, b: &Array1<f64>, config: &ReduceConfig) -> Result<Solution> {
    let mut reduced = a.clone();
    let mut x = b.clone();
    let report = reduce_with_config(&mut reduced, &mut x, config)?;

    let ax = mat_vec(a, x.view())?;
    let abs_residual = vector_norm((&ax - b).view());
    let b_norm = vector_norm(b.view());
    let residual = if b_norm > 0.0 {
        abs_residual / b_norm
    } else {
        abs_residual
    };

    if config.verbosity > 0 {
        log::info!("Direct solve: relative residual = {:.3e}", residual);
    }

    Ok(Solution {
        x,
        residual,
        report,
    })
}
