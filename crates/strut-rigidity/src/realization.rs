//! Realization-count post-processing.
//!
//! Counting the distinct realizations of a graph on the sphere or in the
//! plane is done by an external combinatorial backend keyed by the
//! integer graph encoding. The engine's contribution is producing that
//! encoding and normalizing the raw counts for display.

use strut_graph::{graph_number, Graph};
use strut_types::StrutResult;

/// Seam for the external realization-counting backend.
///
/// Implementations receive the deterministic graph encoding produced by
/// [`strut_graph::graph_number`] and return *raw* counts; callers go
/// through [`realization_counts`], which normalizes them.
pub trait RealizationCounter {
    /// Raw number of realizations on the sphere for the encoded graph.
    fn sphere_realizations(&self, graph_number: u128) -> u64;

    /// Raw number of realizations in the plane for the encoded graph.
    fn plane_realizations(&self, graph_number: u128) -> u64;
}

/// Normalized realization counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealizationCounts {
    /// Distinct realizations on the sphere.
    pub sphere: u64,
    /// Distinct realizations in the plane.
    pub plane: u64,
}

/// Queries the backend and normalizes its raw counts.
///
/// Raw counts are halved (integer division) to cancel a known two-fold
/// symmetry before display. The single-bar graph (exactly 2 vertices and
/// 1 edge) is special-cased to report 1 for both metrics regardless of
/// the backend.
pub fn realization_counts<C: RealizationCounter>(
    graph: &Graph,
    counter: &C,
) -> StrutResult<RealizationCounts> {
    if graph.vertex_count() == 2 && graph.edge_count() == 1 {
        return Ok(RealizationCounts {
            sphere: 1,
            plane: 1,
        });
    }

    let number = graph_number(graph)?;
    Ok(RealizationCounts {
        sphere: counter.sphere_realizations(number) / 2,
        plane: counter.plane_realizations(number) / 2,
    })
}
