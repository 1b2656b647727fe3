//! Numerical matrix rank.
//!
//! Rank is decided from the singular value spectrum with a relative
//! tolerance, never from exact arithmetic: the rigidity matrices this
//! engine builds are sampled at random integer placements, so genuinely
//! zero singular values come out as floating-point residue a few orders
//! of magnitude above machine epsilon.

use faer::Mat;
use strut_types::{StrutError, StrutResult};

/// Singular values of `matrix`, largest first.
///
/// Decomposition failure (non-convergence) is surfaced as
/// [`StrutError::NumericDegenerate`].
pub fn singular_values(matrix: &Mat<f64>) -> StrutResult<Vec<f64>> {
    let svd = matrix.svd().map_err(|e| {
        StrutError::NumericDegenerate(format!("SVD failed to converge: {e:?}"))
    })?;
    Ok(svd.S().column_vector().iter().copied().collect())
}

/// Relative rank tolerance: `sigma_max * max(rows, cols) * machine epsilon`.
///
/// Matches the threshold the numerical-analysis literature recommends for
/// rank decisions on dense SVDs.
pub fn rank_tolerance(sigma_max: f64, rows: usize, cols: usize) -> f64 {
    sigma_max * rows.max(cols) as f64 * f64::EPSILON
}

/// Numerical rank of a dense matrix.
///
/// Counts singular values above the relative tolerance. Matrices with a
/// zero dimension have rank 0 without decomposing.
pub fn rank(matrix: &Mat<f64>) -> StrutResult<usize> {
    if matrix.nrows() == 0 || matrix.ncols() == 0 {
        return Ok(0);
    }

    let sv = singular_values(matrix)?;
    let sigma_max = sv.iter().fold(0.0f64, |acc, &s| acc.max(s));
    if sigma_max == 0.0 {
        return Ok(0);
    }

    let tol = rank_tolerance(sigma_max, matrix.nrows(), matrix.ncols());
    Ok(sv.iter().filter(|&&s| s > tol).count())
}
