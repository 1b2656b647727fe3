//! Left null-space basis extraction.
//!
//! The left null space of an m×k matrix M is `{x : x^T M = 0}`. For the
//! rigidity matrix, its elements are the equilibrium stresses of the
//! framework. The basis comes from the trailing columns of the full-SVD
//! `U` factor: the left singular vectors whose singular values fall below
//! the rank tolerance.

use faer::Mat;
use strut_types::constants::NULL_SPACE_RESIDUAL_TOLERANCE;
use strut_types::{StrutError, StrutResult};

use crate::rank::rank_tolerance;

/// Orthonormal basis of the left null space of `matrix`, one vector per
/// column. The result has zero columns when the matrix has full row rank.
///
/// Each returned vector is verified to annihilate the matrix within
/// tolerance; a violation means the rank decision was ambiguous and is
/// surfaced as [`StrutError::NumericDegenerate`].
pub fn left_null_space(matrix: &Mat<f64>) -> StrutResult<Mat<f64>> {
    let rows = matrix.nrows();
    let cols = matrix.ncols();

    if rows == 0 {
        return Ok(Mat::zeros(0, 0));
    }
    if cols == 0 {
        // Every vector annihilates an m×0 matrix.
        return Ok(Mat::identity(rows, rows));
    }

    let svd = matrix.svd().map_err(|e| {
        StrutError::NumericDegenerate(format!("SVD failed to converge: {e:?}"))
    })?;
    let singular_values: Vec<f64> = svd.S().column_vector().iter().copied().collect();
    let sigma_max = singular_values.iter().fold(0.0f64, |acc, &s| acc.max(s));
    let tol = rank_tolerance(sigma_max, rows, cols);

    let rank = singular_values.iter().filter(|&&s| s > tol).count();
    let nullity = rows - rank;

    let u = svd.U();
    let basis = Mat::from_fn(rows, nullity, |r, c| u[(r, rank + c)]);

    verify_annihilation(matrix, &basis, sigma_max)?;
    Ok(basis)
}

/// Checks `max |x^T M|` for every basis column against the residual
/// tolerance, relative to the largest singular value.
fn verify_annihilation(matrix: &Mat<f64>, basis: &Mat<f64>, sigma_max: f64) -> StrutResult<()> {
    let scale = sigma_max.max(1.0);
    for c in 0..basis.ncols() {
        let mut worst = 0.0f64;
        for col in 0..matrix.ncols() {
            let mut dot = 0.0f64;
            for row in 0..matrix.nrows() {
                dot += basis[(row, c)] * matrix[(row, col)];
            }
            worst = worst.max(dot.abs());
        }
        if worst > scale * NULL_SPACE_RESIDUAL_TOLERANCE {
            return Err(StrutError::NumericDegenerate(format!(
                "Null-space vector {c} has residual {worst:.3e} (scale {scale:.3e})"
            )));
        }
    }
    Ok(())
}
