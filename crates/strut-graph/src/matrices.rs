//! Graph matrices and their spectra.
//!
//! Builds the dense adjacency and Laplacian matrices of a graph and
//! exposes their eigenvalue sequences. Both matrices are symmetric for a
//! simple graph, so the spectra are real; the ascending sort in
//! strut-math absorbs floating-point residue.

use strut_math::Mat;
use strut_types::StrutResult;

use crate::graph::Graph;

/// Dense n×n adjacency matrix: 1 where vertices are adjacent, 0 elsewhere.
pub fn adjacency_matrix(graph: &Graph) -> Mat<f64> {
    let n = graph.vertex_count();
    let mut matrix = Mat::zeros(n, n);
    for edge in graph.edge_list() {
        let (i, j) = edge.endpoints();
        matrix[(i, j)] = 1.0;
        matrix[(j, i)] = 1.0;
    }
    matrix
}

/// Dense n×n Laplacian: degree diagonal minus adjacency.
///
/// Every row sums to zero.
pub fn laplacian(graph: &Graph) -> Mat<f64> {
    let n = graph.vertex_count();
    let mut matrix = Mat::zeros(n, n);
    for edge in graph.edge_list() {
        let (i, j) = edge.endpoints();
        matrix[(i, j)] = -1.0;
        matrix[(j, i)] = -1.0;
        matrix[(i, i)] += 1.0;
        matrix[(j, j)] += 1.0;
    }
    matrix
}

/// Eigenvalues of the adjacency matrix, ascending.
pub fn adjacency_eigenvalues(graph: &Graph) -> StrutResult<Vec<f64>> {
    strut_math::self_adjoint_eigenvalues(&adjacency_matrix(graph))
}

/// Eigenvalues of the Laplacian, ascending.
pub fn laplacian_eigenvalues(graph: &Graph) -> StrutResult<Vec<f64>> {
    strut_math::self_adjoint_eigenvalues(&laplacian(graph))
}
