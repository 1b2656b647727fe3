//! Integration tests for strut-math.

use strut_math::{left_null_space, rank, self_adjoint_eigenvalues, Mat};

fn mat_from_rows(rows: &[&[f64]]) -> Mat<f64> {
    Mat::from_fn(rows.len(), rows[0].len(), |i, j| rows[i][j])
}

// ─── Rank Tests ───────────────────────────────────────────────

#[test]
fn identity_has_full_rank() {
    let m = Mat::<f64>::identity(4, 4);
    assert_eq!(rank(&m).unwrap(), 4);
}

#[test]
fn zero_matrix_has_rank_zero() {
    let m = Mat::<f64>::zeros(3, 5);
    assert_eq!(rank(&m).unwrap(), 0);
}

#[test]
fn empty_matrix_has_rank_zero() {
    let m = Mat::<f64>::zeros(0, 4);
    assert_eq!(rank(&m).unwrap(), 0);
    let m = Mat::<f64>::zeros(4, 0);
    assert_eq!(rank(&m).unwrap(), 0);
}

#[test]
fn outer_product_has_rank_one() {
    // a * b^T for a = (1,2,3), b = (4,5,6)
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    let m = Mat::from_fn(3, 3, |i, j| a[i] * b[j]);
    assert_eq!(rank(&m).unwrap(), 1);
}

#[test]
fn dependent_row_reduces_rank() {
    // Third row is the sum of the first two.
    let m = mat_from_rows(&[
        &[1.0, 0.0, 2.0],
        &[0.0, 1.0, -1.0],
        &[1.0, 1.0, 1.0],
    ]);
    assert_eq!(rank(&m).unwrap(), 2);
}

#[test]
fn rectangular_rank_bounded_by_min_dimension() {
    let m = mat_from_rows(&[&[1.0, 0.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]]);
    assert_eq!(rank(&m).unwrap(), 2);
}

// ─── Left Null Space Tests ────────────────────────────────────

#[test]
fn full_row_rank_has_trivial_left_null_space() {
    let m = mat_from_rows(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]]);
    let basis = left_null_space(&m).unwrap();
    assert_eq!(basis.nrows(), 2);
    assert_eq!(basis.ncols(), 0);
}

#[test]
fn dependent_rows_yield_null_vector() {
    // Row 2 = row 0 + row 1, so x = (1, 1, -1) annihilates from the left.
    let m = mat_from_rows(&[
        &[1.0, 0.0],
        &[0.0, 1.0],
        &[1.0, 1.0],
    ]);
    let basis = left_null_space(&m).unwrap();
    assert_eq!(basis.nrows(), 3);
    assert_eq!(basis.ncols(), 1);

    // Annihilation: x^T M = 0.
    for col in 0..m.ncols() {
        let dot: f64 = (0..3).map(|r| basis[(r, 0)] * m[(r, col)]).sum();
        assert!(dot.abs() < 1e-10, "Residual {dot} in column {col}");
    }

    // SVD basis vectors are unit length.
    let norm: f64 = (0..3).map(|r| basis[(r, 0)] * basis[(r, 0)]).sum::<f64>().sqrt();
    assert!((norm - 1.0).abs() < 1e-10);
}

#[test]
fn zero_matrix_left_null_space_is_everything() {
    let m = Mat::<f64>::zeros(3, 2);
    let basis = left_null_space(&m).unwrap();
    assert_eq!(basis.ncols(), 3);
}

#[test]
fn no_columns_yields_identity_basis() {
    let m = Mat::<f64>::zeros(4, 0);
    let basis = left_null_space(&m).unwrap();
    assert_eq!(basis.nrows(), 4);
    assert_eq!(basis.ncols(), 4);
}

// ─── Spectrum Tests ───────────────────────────────────────────

#[test]
fn diagonal_eigenvalues_sorted_ascending() {
    let m = mat_from_rows(&[
        &[3.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0],
        &[0.0, 0.0, 2.0],
    ]);
    let vals = self_adjoint_eigenvalues(&m).unwrap();
    assert_eq!(vals.len(), 3);
    assert!((vals[0] - 1.0).abs() < 1e-10);
    assert!((vals[1] - 2.0).abs() < 1e-10);
    assert!((vals[2] - 3.0).abs() < 1e-10);
}

#[test]
fn swap_matrix_spectrum() {
    // [[0, 1], [1, 0]] has eigenvalues -1 and 1.
    let m = mat_from_rows(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let vals = self_adjoint_eigenvalues(&m).unwrap();
    assert!((vals[0] + 1.0).abs() < 1e-10);
    assert!((vals[1] - 1.0).abs() < 1e-10);
}

#[test]
fn empty_spectrum() {
    let m = Mat::<f64>::zeros(0, 0);
    assert!(self_adjoint_eigenvalues(&m).unwrap().is_empty());
}

#[test]
fn non_square_spectrum_fails() {
    let m = Mat::<f64>::zeros(2, 3);
    assert!(self_adjoint_eigenvalues(&m).is_err());
}
