//! Canonical edge identifier.
//!
//! Vertices are plain dense indices in `[0, n)`; the only structured
//! identifier is the unordered vertex pair. Storing the pair canonically
//! (smaller endpoint first) makes edge equality, hashing, and the
//! rigidity-matrix row ordering all agree on one representation.

use serde::{Deserialize, Serialize};

use crate::error::{StrutError, StrutResult};

/// An unordered pair of distinct vertex ids, stored as `i < j`.
///
/// `Ord` follows `(i, j)`, so a sorted sequence of edges is the canonical
/// enumeration order used for rigidity-matrix rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    i: usize,
    j: usize,
}

impl Edge {
    /// Creates an edge between two distinct vertices, normalizing the order.
    ///
    /// Self-loops are rejected: a simple graph has none.
    pub fn new(a: usize, b: usize) -> StrutResult<Self> {
        if a == b {
            return Err(StrutError::InvalidEdge(format!(
                "Self-loop {{{a}, {a}}} is not a simple-graph edge"
            )));
        }
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { i, j })
    }

    /// Creates an edge from endpoints already known to satisfy `i < j`.
    ///
    /// Callers that enumerate ordered adjacency (smaller endpoint first)
    /// use this to skip the loop check of [`Edge::new`].
    #[inline]
    pub fn from_sorted(i: usize, j: usize) -> Self {
        debug_assert!(i < j);
        Self { i, j }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn i(self) -> usize {
        self.i
    }

    /// The larger endpoint.
    #[inline]
    pub fn j(self) -> usize {
        self.j
    }

    /// Both endpoints as `(smaller, larger)`.
    #[inline]
    pub fn endpoints(self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// Returns true if `v` is one of the two endpoints.
    #[inline]
    pub fn is_incident_to(self, v: usize) -> bool {
        self.i == v || self.j == v
    }

    /// Given one endpoint, returns the other.
    ///
    /// Returns `None` if `v` is not an endpoint of this edge.
    pub fn other_endpoint(self, v: usize) -> Option<usize> {
        if v == self.i {
            Some(self.j)
        } else if v == self.j {
            Some(self.i)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.i, self.j)
    }
}
