//! Eigenvalue spectra of symmetric matrices.
//!
//! Adjacency and Laplacian matrices of simple graphs are symmetric, so
//! their spectra are real in exact arithmetic. The ascending sort uses a
//! total order to absorb floating-point residue deterministically.

use faer::{Mat, Side};
use strut_types::{StrutError, StrutResult};

/// Eigenvalues of a symmetric matrix, sorted ascending.
///
/// Only the lower triangle is read. Non-square input is rejected.
pub fn self_adjoint_eigenvalues(matrix: &Mat<f64>) -> StrutResult<Vec<f64>> {
    if matrix.nrows() != matrix.ncols() {
        return Err(StrutError::InvalidConfig(format!(
            "Spectrum requires a square matrix, got {}×{}",
            matrix.nrows(),
            matrix.ncols()
        )));
    }
    if matrix.nrows() == 0 {
        return Ok(Vec::new());
    }

    let evd = matrix.self_adjoint_eigen(Side::Lower).map_err(|e| {
        StrutError::NumericDegenerate(format!("Eigendecomposition failed: {e:?}"))
    })?;

    let mut values: Vec<f64> = evd.S().column_vector().iter().copied().collect();
    values.sort_by(f64::total_cmp);
    Ok(values)
}
