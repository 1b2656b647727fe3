//! Generic rigidity matrix construction.
//!
//! The rigidity matrix is the Jacobian of the squared-edge-length
//! constraints with respect to the vertex coordinates, evaluated at a
//! placement. Row order is keyed by the canonical edge enumeration
//! (ascending smaller endpoint, then larger), which is computed once per
//! build and carried alongside the matrix so every downstream consumer
//! indexes the same ordering.

use faer::Mat;
use rand::Rng;
use strut_graph::Graph;
use strut_types::{Edge, StrutError, StrutResult};

use crate::placement::Placement;

/// The m×(d·n) rigidity matrix of a graph at a placement, together with
/// the edge enumeration its rows follow.
#[derive(Debug, Clone)]
pub struct RigidityMatrix {
    matrix: Mat<f64>,
    edges: Vec<Edge>,
    vertex_count: usize,
    dimension: usize,
}

impl RigidityMatrix {
    /// Samples a fresh random placement and builds the rigidity matrix.
    pub fn build<R: Rng>(graph: &Graph, dimension: usize, rng: &mut R) -> StrutResult<Self> {
        let placement = Placement::random(graph.vertex_count(), dimension, rng)?;
        Self::at_placement(graph, &placement)
    }

    /// Builds the rigidity matrix at an explicit placement.
    ///
    /// For edge e = {i, j} (i < j) at its canonical row, the i-block is
    /// `placement[i] - placement[j]`, the j-block its negation, and all
    /// other entries zero: the gradient of the squared-edge-length
    /// constraint.
    pub fn at_placement(graph: &Graph, placement: &Placement) -> StrutResult<Self> {
        let n = graph.vertex_count();
        let d = placement.dimension();
        if placement.vertex_count() != n {
            return Err(StrutError::InvalidConfig(format!(
                "Placement covers {} vertices but the graph has {n}",
                placement.vertex_count()
            )));
        }

        let edges = graph.edge_list();
        let mut matrix = Mat::zeros(edges.len(), d * n);
        for (row, edge) in edges.iter().enumerate() {
            let (i, j) = edge.endpoints();
            for k in 0..d {
                let diff = placement.coordinate(i, k) - placement.coordinate(j, k);
                matrix[(row, d * i + k)] = diff;
                matrix[(row, d * j + k)] = -diff;
            }
        }

        Ok(Self {
            matrix,
            edges,
            vertex_count: n,
            dimension: d,
        })
    }

    /// The underlying dense matrix.
    #[inline]
    pub fn matrix(&self) -> &Mat<f64> {
        &self.matrix
    }

    /// Canonical edge enumeration the rows follow.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of rows (edges).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of placed vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Embedding dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
