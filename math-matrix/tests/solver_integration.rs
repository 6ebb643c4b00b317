//! End-to-end checks for the linear-equation-system solver and matrix file I/O

use approx::assert_relative_eq;
use math_audio_matrix::{
    Matrix, MatrixError, ReduceConfig, mat_vec, read_matrix_from_file, reduce, solve,
    write_matrix_to_file,
};
use ndarray::{Array1, array};
use tempfile::tempdir;

/// Diagonally dominant test matrix of size n
fn dominant_matrix(n: usize) -> Matrix {
    let mut values = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let v = if i == j {
                2.0 * n as f64
            } else {
                ((i * 7 + j * 3) % 5) as f64 - 2.0
            };
            values.push(v);
        }
    }
    Matrix::from_row_major(n, n, values).unwrap()
}

#[test]
fn test_reduce_reconstructs_rhs() {
    for n in [1, 2, 5, 12, 30] {
        let a = dominant_matrix(n);
        let b = Array1::from_iter((0..n).map(|i| (i as f64 + 1.0).sin()));

        let mut reduced = a.clone();
        let mut x = b.clone();
        reduce(&mut reduced, &mut x).expect("dominant matrices are invertible");

        assert!(reduced.approx_eq(&Matrix::identity(n).unwrap(), 1e-12));
        let ax = mat_vec(&a, x.view()).unwrap();
        for i in 0..n {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_singular_system_reported() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
    let b = array![3.0, 6.0];

    let err = solve(&a, &b, &ReduceConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        MatrixError::SingularMatrix { pivot_index: 1, .. }
    ));
}

#[test]
fn test_permutation_matrix_system() {
    // every pivot needs a swap
    let a = Matrix::from_rows(&[
        vec![0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
    ])
    .unwrap();
    let b = array![3.0, 1.0, 2.0];

    let solution = solve(&a, &b, &ReduceConfig::default()).unwrap();

    assert_eq!(solution.x, array![1.0, 2.0, 3.0]);
    assert!(solution.report.row_swaps >= 1);
    assert_eq!(solution.residual, 0.0);
}

#[test]
fn test_file_roundtrip_then_solve() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("system.txt");

    let a = Matrix::from_rows(&[
        vec![0.1, -2.0 / 3.0, 1e-300],
        vec![std::f64::consts::PI, 4.0, -7.25],
        vec![1.0 / 7.0, 0.0, 123456789.0],
    ])
    .unwrap();

    write_matrix_to_file(&a, &path).unwrap();
    let back = read_matrix_from_file(&path).unwrap();

    assert_eq!(back.shape(), a.shape());
    assert_eq!(back, a);

    let b = array![1.0, 2.0, 3.0];
    let solution = solve(&back, &b, &ReduceConfig::default()).unwrap();
    assert!(solution.residual < 1e-12);
}

#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_matrix_from_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, MatrixError::Io(_)));
}

#[test]
fn test_read_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "1,2,3\n4,5\n").unwrap();

    let err = read_matrix_from_file(&path).unwrap_err();
    assert!(err.is_parse_error());
}
