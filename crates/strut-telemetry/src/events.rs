//! Analysis event types.
//!
//! Structured events emitted by the rigidity pipeline at various points
//! in each query. Events are lightweight value types that carry just
//! enough data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// An analysis event emitted by the engine.
///
/// Events are tagged with a query index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEvent {
    /// Query number (0-indexed, incremented per verdict-producing call).
    pub query: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A random placement was sampled for a rigidity-matrix build.
    PlacementSampled {
        /// Number of placed vertices.
        vertex_count: usize,
        /// Embedding dimension.
        dimension: usize,
    },

    /// Rigidity-matrix rank was computed.
    RankComputed {
        /// Matrix rows (edge count).
        rows: usize,
        /// Matrix columns (dimension × vertex count).
        cols: usize,
        /// Numerical rank.
        rank: usize,
    },

    /// An equilibrium stress was drawn from the left null space.
    StressSampled {
        /// Dimension of the sampled stress space.
        nullity: usize,
        /// Length of the stress vector (edge count).
        edge_count: usize,
    },

    /// Stress-matrix rank was computed against the global-rigidity bound.
    StressRankComputed {
        /// Rank of the stress matrix.
        rank: usize,
        /// The generic bound n − d − 1 (clamped at zero).
        bound: usize,
    },

    /// A verdict was produced.
    Verdict {
        /// The human-readable classification string.
        text: String,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl AnalysisEvent {
    /// Creates a new event for the given query.
    pub fn new(query: u32, kind: EventKind) -> Self {
        Self { query, kind }
    }
}
