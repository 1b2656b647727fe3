//! Core simple-graph type with adjacency-set storage.
//!
//! Vertices are dense ids in `[0, n)`; adjacency is a symmetric relation
//! (`j ∈ neighbors(i) ⇔ i ∈ neighbors(j)`). Neighbor sets are ordered so
//! every enumeration is deterministic: the rigidity-matrix row order is
//! keyed by the edge enumeration and must be stable across queries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strut_types::{Edge, StrutError, StrutResult};

/// A simple undirected graph over dense vertex ids.
///
/// The vertex with id `v` is the `v`-th entry of the adjacency table, so
/// ids are contiguous from 0 by construction: [`Graph::add_vertex`] always
/// appends `max(existing) + 1` (0 when empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// For each vertex, the ordered set of its neighbors.
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` isolated vertices (ids `0..n`).
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); n],
        }
    }

    /// Creates a graph with `n` vertices and the given edges.
    pub fn from_edges(n: usize, pairs: &[(usize, usize)]) -> StrutResult<Self> {
        let mut graph = Self::with_vertices(n);
        for &(a, b) in pairs {
            graph.add_edge(Edge::new(a, b)?)?;
        }
        Ok(graph)
    }

    /// Appends a new isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(BTreeSet::new());
        self.adjacency.len() - 1
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Returns true if `v` is a vertex of this graph.
    #[inline]
    pub fn has_vertex(&self, v: usize) -> bool {
        v < self.adjacency.len()
    }

    /// Returns true if both endpoints exist and are adjacent.
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.adjacency
            .get(edge.i())
            .is_some_and(|set| set.contains(&edge.j()))
    }

    /// Makes the two endpoints mutually adjacent.
    ///
    /// Both endpoints must already be vertices. Inserting an edge that is
    /// already present is a no-op.
    pub fn add_edge(&mut self, edge: Edge) -> StrutResult<()> {
        let (i, j) = edge.endpoints();
        self.require_vertex(i)?;
        self.require_vertex(j)?;
        self.adjacency[i].insert(j);
        self.adjacency[j].insert(i);
        Ok(())
    }

    /// Removes the mutual adjacency between the two endpoints.
    ///
    /// Removing an edge that is not present is an error.
    pub fn remove_edge(&mut self, edge: Edge) -> StrutResult<()> {
        let (i, j) = edge.endpoints();
        self.require_vertex(i)?;
        self.require_vertex(j)?;
        if !self.adjacency[i].contains(&j) {
            return Err(StrutError::InvalidEdge(format!(
                "Edge {edge} is not present"
            )));
        }
        self.adjacency[i].remove(&j);
        self.adjacency[j].remove(&i);
        Ok(())
    }

    /// The ordered neighbor set of `v`.
    pub fn neighbors(&self, v: usize) -> StrutResult<&BTreeSet<usize>> {
        self.require_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Degree of `v`.
    pub fn degree(&self, v: usize) -> StrutResult<usize> {
        Ok(self.neighbors(v)?.len())
    }

    /// Iterator over all vertex ids in ascending order.
    pub fn vertex_set(&self) -> std::ops::Range<usize> {
        0..self.adjacency.len()
    }

    /// All edges in canonical order: ascending smaller endpoint, then
    /// ascending larger endpoint. Each edge appears exactly once (emitted
    /// from its smaller endpoint), with no self-loops by construction.
    pub fn edge_list(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors.range((i + 1)..) {
                edges.push(Edge::from_sorted(i, j));
            }
        }
        edges
    }

    /// Returns true if every pair of distinct vertices is adjacent.
    ///
    /// The empty graph and the single vertex are complete by convention.
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        2 * self.edge_count() == n * (n.saturating_sub(1))
    }

    fn require_vertex(&self, v: usize) -> StrutResult<()> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            Err(StrutError::InvalidEdge(format!(
                "Vertex {v} does not exist (vertex count: {})",
                self.vertex_count()
            )))
        }
    }
}
