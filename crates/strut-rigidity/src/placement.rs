//! Random generic placements.
//!
//! A placement assigns each vertex a point in R^d. Rigidity is a generic
//! property, holding for almost every placement, so each query samples a
//! fresh one and discards it afterwards; placements are never cached or
//! persisted.

use faer::Mat;
use rand::Rng;
use strut_types::constants::COORDINATE_RANGE_FACTOR;
use strut_types::{StrutError, StrutResult};

/// An n×d coordinate assignment for a vertex set.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Row v holds the d coordinates of vertex v.
    coords: Mat<f64>,
}

impl Placement {
    /// Samples a random placement for `vertex_count` vertices in R^`dimension`.
    ///
    /// Each coordinate is drawn independently and uniformly from the
    /// integers `{0, ..., 100 * vertex_count}`. The range scales with the
    /// vertex count so the probability of an accidental algebraic
    /// coincidence, which would corrupt the generic-rank assumption,
    /// vanishes as the graph grows.
    pub fn random<R: Rng>(
        vertex_count: usize,
        dimension: usize,
        rng: &mut R,
    ) -> StrutResult<Self> {
        if dimension == 0 {
            return Err(StrutError::InvalidDimension(
                "Embedding dimension must be at least 1".into(),
            ));
        }
        if vertex_count == 0 {
            return Err(StrutError::EmptyGraph(
                "Cannot place an empty vertex set".into(),
            ));
        }

        let upper = COORDINATE_RANGE_FACTOR * vertex_count as u64;
        let mut coords = Mat::zeros(vertex_count, dimension);
        for v in 0..vertex_count {
            for k in 0..dimension {
                coords[(v, k)] = rng.gen_range(0..=upper) as f64;
            }
        }
        Ok(Self { coords })
    }

    /// Builds a placement from explicit coordinates (row per vertex).
    ///
    /// Useful for deterministic tests; production queries always sample.
    pub fn from_coordinates(coords: Mat<f64>) -> StrutResult<Self> {
        if coords.ncols() == 0 {
            return Err(StrutError::InvalidDimension(
                "Embedding dimension must be at least 1".into(),
            ));
        }
        if coords.nrows() == 0 {
            return Err(StrutError::EmptyGraph(
                "Cannot place an empty vertex set".into(),
            ));
        }
        Ok(Self { coords })
    }

    /// Number of placed vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.coords.nrows()
    }

    /// Embedding dimension.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.ncols()
    }

    /// The k-th coordinate of vertex `v`.
    #[inline]
    pub fn coordinate(&self, v: usize, k: usize) -> f64 {
        self.coords[(v, k)]
    }
}
