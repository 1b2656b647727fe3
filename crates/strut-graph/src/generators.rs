//! Procedural graph generators for tests and the CLI.
//!
//! All generators produce deterministic graphs with the canonical dense
//! vertex numbering.

use strut_types::{Edge, StrutError, StrutResult};

use crate::graph::Graph;

/// Complete graph K_n: every pair of distinct vertices is adjacent.
pub fn complete(n: usize) -> StrutResult<Graph> {
    let mut graph = Graph::with_vertices(n);
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(Edge::from_sorted(i, j))?;
        }
    }
    Ok(graph)
}

/// Cycle graph C_n: vertices in a ring. Needs at least 3 vertices, since
/// smaller rings would need loops or duplicate edges.
pub fn cycle(n: usize) -> StrutResult<Graph> {
    if n < 3 {
        return Err(StrutError::InvalidConfig(format!(
            "Cycle graph needs at least 3 vertices, got {n}"
        )));
    }
    let mut graph = Graph::with_vertices(n);
    for i in 0..n {
        graph.add_edge(Edge::new(i, (i + 1) % n)?)?;
    }
    Ok(graph)
}

/// Path graph P_n: vertices in a chain with n − 1 edges.
pub fn path(n: usize) -> StrutResult<Graph> {
    let mut graph = Graph::with_vertices(n);
    for i in 1..n {
        graph.add_edge(Edge::from_sorted(i - 1, i))?;
    }
    Ok(graph)
}
