//! Interactive session facade.
//!
//! The `Workbench` is the surface an interactive front end drives: it
//! owns the long-lived graph, the embedding dimension, the session RNG,
//! and the telemetry bus. Everything else in this crate is stateless;
//! the workbench wires it together one synchronous query at a time.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use strut_graph::{graph_number, matrices, Graph};
use strut_telemetry::events::EventKind;
use strut_telemetry::{AnalysisEvent, EventBus};
use strut_types::{Edge, StrutError, StrutResult};

use crate::config::AnalysisConfig;
use crate::realization::{realization_counts, RealizationCounter, RealizationCounts};
use crate::stress::{global_rigidity_check, GlobalRigidityReport};
use crate::tester::{rigidity_check, RigidityReport};

/// A rigidity analysis session over one mutable graph.
///
/// Single-threaded and synchronous: every operation computes on demand
/// and returns before the next is requested. Placements, rigidity
/// matrices, and stresses are transient per query; only the graph, the
/// dimension, and the RNG live across calls.
pub struct Workbench {
    graph: Graph,
    dimension: usize,
    rng: SmallRng,
    telemetry: EventBus,
    query: u32,
}

impl Workbench {
    /// Creates a workbench over an empty graph.
    pub fn new(config: &AnalysisConfig) -> StrutResult<Self> {
        Self::with_graph(Graph::new(), config)
    }

    /// Creates a workbench over an existing graph.
    pub fn with_graph(graph: Graph, config: &AnalysisConfig) -> StrutResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Self {
            graph,
            dimension: config.dimension,
            rng,
            telemetry: EventBus::new(),
            query: 0,
        })
    }

    // ─── Mutation ───

    /// Appends a new isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        self.graph.add_vertex()
    }

    /// Connects two existing vertices.
    pub fn add_edge(&mut self, a: usize, b: usize) -> StrutResult<()> {
        self.graph.add_edge(Edge::new(a, b)?)
    }

    /// Disconnects two vertices; the edge must be present.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> StrutResult<()> {
        self.graph.remove_edge(Edge::new(a, b)?)
    }

    // ─── Queries ───

    /// The graph under analysis.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Canonical edge enumeration.
    pub fn edge_list(&self) -> Vec<Edge> {
        self.graph.edge_list()
    }

    /// Ascending adjacency spectrum.
    pub fn adjacency_eigenvalues(&self) -> StrutResult<Vec<f64>> {
        matrices::adjacency_eigenvalues(&self.graph)
    }

    /// Ascending Laplacian spectrum.
    pub fn laplacian_eigenvalues(&self) -> StrutResult<Vec<f64>> {
        matrices::laplacian_eigenvalues(&self.graph)
    }

    /// Current embedding dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Raises the embedding dimension by one and returns the new value.
    pub fn increase_dimension(&mut self) -> usize {
        self.dimension += 1;
        self.dimension
    }

    /// Lowers the embedding dimension by one and returns the new value.
    ///
    /// The dimension never drops below 1.
    pub fn decrease_dimension(&mut self) -> StrutResult<usize> {
        if self.dimension <= 1 {
            return Err(StrutError::InvalidDimension(
                "Embedding dimension cannot drop below 1".into(),
            ));
        }
        self.dimension -= 1;
        Ok(self.dimension)
    }

    /// The telemetry bus, for registering sinks or flushing.
    pub fn telemetry_mut(&mut self) -> &mut EventBus {
        &mut self.telemetry
    }

    /// Deterministic integer encoding of the current graph.
    pub fn graph_number(&self) -> StrutResult<u128> {
        graph_number(&self.graph)
    }

    /// Normalized realization counts via an external backend.
    pub fn realization_counts<C: RealizationCounter>(
        &self,
        counter: &C,
    ) -> StrutResult<RealizationCounts> {
        realization_counts(&self.graph, counter)
    }

    // ─── Verdicts ───

    /// Runs a rigidity query on a fresh random placement.
    pub fn rigidity_check(&mut self) -> StrutResult<RigidityReport> {
        let report = rigidity_check(&self.graph, self.dimension, &mut self.rng)?;
        let query = self.next_query();

        if let Some(check) = report.rank_check {
            self.telemetry.emit(AnalysisEvent::new(
                query,
                EventKind::PlacementSampled {
                    vertex_count: self.graph.vertex_count(),
                    dimension: self.dimension,
                },
            ));
            self.telemetry.emit(AnalysisEvent::new(
                query,
                EventKind::RankComputed {
                    rows: self.graph.edge_count(),
                    cols: self.dimension * self.graph.vertex_count(),
                    rank: check.rank,
                },
            ));
        }
        self.telemetry.emit(AnalysisEvent::new(
            query,
            EventKind::Verdict {
                text: report.to_string(),
            },
        ));
        self.telemetry.flush();
        Ok(report)
    }

    /// Runs a global-rigidity query on a fresh random placement.
    pub fn global_rigidity_check(&mut self) -> StrutResult<GlobalRigidityReport> {
        let report = global_rigidity_check(&self.graph, self.dimension, &mut self.rng)?;
        let query = self.next_query();

        if let Some(check) = report.rank_check {
            self.telemetry.emit(AnalysisEvent::new(
                query,
                EventKind::PlacementSampled {
                    vertex_count: self.graph.vertex_count(),
                    dimension: self.dimension,
                },
            ));
            self.telemetry.emit(AnalysisEvent::new(
                query,
                EventKind::RankComputed {
                    rows: self.graph.edge_count(),
                    cols: self.dimension * self.graph.vertex_count(),
                    rank: check.rank,
                },
            ));
        }
        if let Some(nullity) = report.stress_nullity {
            self.telemetry.emit(AnalysisEvent::new(
                query,
                EventKind::StressSampled {
                    nullity,
                    edge_count: self.graph.edge_count(),
                },
            ));
        }
        if let Some(stress_check) = report.stress_check {
            self.telemetry.emit(AnalysisEvent::new(
                query,
                EventKind::StressRankComputed {
                    rank: stress_check.rank,
                    bound: stress_check.bound,
                },
            ));
        }
        self.telemetry.emit(AnalysisEvent::new(
            query,
            EventKind::Verdict {
                text: report.to_string(),
            },
        ));
        self.telemetry.flush();
        Ok(report)
    }

    fn next_query(&mut self) -> u32 {
        let query = self.query;
        self.query += 1;
        query
    }
}
