//! Analysis input/output contract types.
//!
//! These types define the I/O boundary of the Strut engine.
//! They are serializable for API transport and CLI configuration.

use serde::{Deserialize, Serialize};
use strut_graph::Graph;
use strut_rigidity::{GlobalRigidity, GlobalRigidityReport, RigidityReport};
use strut_types::{Edge, StrutResult};

/// A graph described by its vertex count and edge pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInput {
    /// Number of vertices; ids run from 0 to `vertex_count - 1`.
    pub vertex_count: usize,

    /// Edges as `[a, b]` pairs of vertex ids.
    pub edges: Vec<[usize; 2]>,
}

impl GraphInput {
    /// Converts the description into a graph.
    ///
    /// Endpoint and loop errors surface as typed failures; run
    /// [`crate::validator::validate_input`] first for friendlier
    /// diagnostics.
    pub fn to_graph(&self) -> StrutResult<Graph> {
        let mut graph = Graph::with_vertices(self.vertex_count);
        for &[a, b] in &self.edges {
            graph.add_edge(Edge::new(a, b)?)?;
        }
        Ok(graph)
    }
}

/// Parameters for an analysis run.
///
/// Missing fields fall back to defaults, so a parameter file may name
/// only what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Embedding dimension d.
    pub dimension: usize,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How many times to repeat the query. Reruns are the user-facing
    /// answer to measure-zero sampling failures, so they are a parameter
    /// here rather than an internal retry.
    pub trials: u32,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            dimension: strut_types::constants::DEFAULT_DIMENSION,
            seed: None,
            trials: 1,
        }
    }
}

/// Complete input for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// The graph to analyze.
    pub graph: GraphInput,

    /// Analysis parameters.
    #[serde(default)]
    pub params: AnalysisParams,
}

/// Output from a completed analysis query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The human-readable classification string.
    pub verdict: String,

    /// Embedding dimension the query ran in.
    pub dimension: usize,

    /// Rigidity-matrix rank, when a rank test ran.
    pub rank: Option<usize>,

    /// Matroid independence flag, when a rank test ran.
    pub independent: Option<bool>,

    /// Rigidity flag, when a rank test ran.
    pub rigid: Option<bool>,

    /// Global-rigidity flag, for global queries that ran the stress test.
    pub globally_rigid: Option<bool>,

    /// Stress-matrix rank, for global queries that ran the stress test.
    pub stress_rank: Option<usize>,

    /// True when the verdict rests on a single random sample and a
    /// repeat query is worthwhile.
    pub rerun_advised: bool,
}

impl AnalysisReport {
    /// Builds a report from a rigidity query result.
    pub fn from_rigidity(report: &RigidityReport) -> Self {
        Self {
            verdict: report.to_string(),
            dimension: report.dimension,
            rank: report.rank_check.map(|c| c.rank),
            independent: report.rank_check.map(|c| c.independent),
            rigid: report.rank_check.map(|c| c.rigid),
            globally_rigid: None,
            stress_rank: None,
            rerun_advised: report.rerun_advised(),
        }
    }

    /// Builds a report from a global-rigidity query result.
    pub fn from_global(report: &GlobalRigidityReport) -> Self {
        Self {
            verdict: report.to_string(),
            dimension: report.dimension,
            rank: report.rank_check.map(|c| c.rank),
            independent: report.rank_check.map(|c| c.independent),
            rigid: report.rank_check.map(|c| c.rigid),
            globally_rigid: Some(report.classification == GlobalRigidity::GloballyRigid),
            stress_rank: report.stress_check.map(|c| c.rank),
            rerun_advised: report.rerun_advised,
        }
    }
}
