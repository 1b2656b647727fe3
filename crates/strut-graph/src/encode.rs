//! Integer encoding of the adjacency structure.
//!
//! The "graph number" keys the external realization-counting backend. The
//! encoding enumerates vertex pairs (i, j), i < j, in canonical order
//! (ascending i, then ascending j), emits 1 for an edge and 0 otherwise,
//! and reads the bitstring most-significant-bit-first as an unsigned
//! integer. Two graphs on the same vertex count get the same number iff
//! they have the same edge set.

use strut_types::{Edge, StrutError, StrutResult};

use crate::graph::Graph;

/// Largest vertex count the `u128` encoding can hold
/// (`16 * 15 / 2 = 120` pair bits).
pub const MAX_ENCODABLE_VERTICES: usize = 16;

/// Deterministic integer encoding of a graph's adjacency structure.
///
/// Graphs with more than [`MAX_ENCODABLE_VERTICES`] vertices do not fit
/// the fixed-width encoding and are rejected.
pub fn graph_number(graph: &Graph) -> StrutResult<u128> {
    let n = graph.vertex_count();
    if n > MAX_ENCODABLE_VERTICES {
        return Err(StrutError::Unsupported(format!(
            "Graph encoding supports at most {MAX_ENCODABLE_VERTICES} vertices, got {n}"
        )));
    }

    let mut number: u128 = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            number <<= 1;
            if graph.has_edge(Edge::from_sorted(i, j)) {
                number |= 1;
            }
        }
    }
    Ok(number)
}
