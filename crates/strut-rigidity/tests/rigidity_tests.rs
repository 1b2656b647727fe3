//! Integration tests for strut-rigidity.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use strut_graph::generators::{complete, cycle, path};
use strut_graph::Graph;
use strut_math::Mat;
use strut_rigidity::classify::{classify_size, SizeClass};
use strut_rigidity::{
    global_rigidity_check, rank_check, realization_counts, rigidity_check, sample_stress,
    stress_matrix, stress_rank_check, AnalysisConfig, GlobalRigidity, Placement,
    RealizationCounter, RigidityMatrix, Rigidity, Workbench,
};

// ─── Placement Tests ──────────────────────────────────────────

#[test]
fn placement_has_requested_shape() {
    let mut rng = SmallRng::seed_from_u64(1);
    let p = Placement::random(5, 3, &mut rng).unwrap();
    assert_eq!(p.vertex_count(), 5);
    assert_eq!(p.dimension(), 3);
}

#[test]
fn placement_coordinates_stay_in_range() {
    let mut rng = SmallRng::seed_from_u64(2);
    let p = Placement::random(4, 2, &mut rng).unwrap();
    for v in 0..4 {
        for k in 0..2 {
            let c = p.coordinate(v, k);
            assert!((0.0..=400.0).contains(&c), "Coordinate {c} out of range");
            assert_eq!(c.fract(), 0.0, "Coordinates are sampled on integers");
        }
    }
}

#[test]
fn placement_rejects_zero_dimension() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(Placement::random(3, 0, &mut rng).is_err());
}

#[test]
fn placement_rejects_empty_vertex_set() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(Placement::random(0, 2, &mut rng).is_err());
}

// ─── Rigidity Matrix Tests ────────────────────────────────────

#[test]
fn rigidity_matrix_blocks_match_gradient() {
    // Single edge {0, 1} at a known placement.
    let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let coords = Mat::from_fn(2, 2, |v, k| [[1.0, 2.0], [4.0, 6.0]][v][k]);
    let placement = Placement::from_coordinates(coords).unwrap();
    let rm = RigidityMatrix::at_placement(&graph, &placement).unwrap();

    let m = rm.matrix();
    assert_eq!(m.nrows(), 1);
    assert_eq!(m.ncols(), 4);
    // i-block: p0 - p1 = (-3, -4); j-block: negation.
    assert_eq!(m[(0, 0)], -3.0);
    assert_eq!(m[(0, 1)], -4.0);
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(0, 3)], 4.0);
}

#[test]
fn rigidity_matrix_rows_follow_canonical_edge_order() {
    let graph = Graph::from_edges(3, &[(2, 1), (0, 2), (1, 0)]).unwrap();
    let mut rng = SmallRng::seed_from_u64(4);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let pairs: Vec<(usize, usize)> = rm.edges().iter().map(|e| e.endpoints()).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    assert_eq!(rm.edge_count(), 3);
}

#[test]
fn rigidity_matrix_rejects_zero_dimension() {
    let graph = complete(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(RigidityMatrix::build(&graph, 0, &mut rng).is_err());
}

#[test]
fn rigidity_matrix_rejects_empty_graph() {
    let graph = Graph::new();
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(RigidityMatrix::build(&graph, 2, &mut rng).is_err());
}

// ─── Rank Check Tests ─────────────────────────────────────────

#[test]
fn triangle_rank_is_full() {
    let graph = complete(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(6);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let check = rank_check(&rm).unwrap();
    assert_eq!(check.rank, 3);
    assert!(check.independent);
    assert!(check.rigid);
}

#[test]
fn four_cycle_rank_is_edge_count_but_not_rigid() {
    let graph = cycle(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let check = rank_check(&rm).unwrap();
    assert_eq!(check.rank, 4);
    assert!(check.independent);
    assert!(!check.rigid); // one edge short of 2n - 3 = 5
}

// ─── Rigidity Classification Tests ────────────────────────────

#[test]
fn triangle_is_never_flexible() {
    // A known generically rigid graph must classify rigid across
    // repeated randomized trials.
    let graph = complete(3).unwrap();
    for seed in 0..25 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = rigidity_check(&graph, 2, &mut rng).unwrap();
        assert_eq!(report.rigidity, Rigidity::MinimallyRigid, "Seed {seed}");
    }
}

#[test]
fn four_cycle_is_independent_and_flexible() {
    let graph = cycle(4).unwrap();
    for seed in 0..25 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = rigidity_check(&graph, 2, &mut rng).unwrap();
        assert_eq!(report.rigidity, Rigidity::IndependentFlexible, "Seed {seed}");
        assert!(!report.rerun_advised());
    }
}

#[test]
fn complete_k4_is_dependent_and_rigid_in_plane() {
    let graph = complete(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(8);
    let report = rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.rigidity, Rigidity::DependentRigid);
}

#[test]
fn k4_with_isolated_vertex_is_dependent_and_flexible() {
    let mut graph = complete(4).unwrap();
    graph.add_vertex();
    let mut rng = SmallRng::seed_from_u64(9);
    let report = rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.rigidity, Rigidity::DependentFlexible);
    assert!(report.rerun_advised());
}

#[test]
fn single_bar_is_minimally_rigid_without_randomness() {
    // n = 2 < d + 1 = 3: settled by edge counting, no rank check runs.
    let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let mut rng = SmallRng::seed_from_u64(10);
    let report = rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.rigidity, Rigidity::MinimallyRigid);
    assert!(report.rank_check.is_none());
}

#[test]
fn undersized_incomplete_graph_is_flexible() {
    let graph = Graph::with_vertices(2);
    let mut rng = SmallRng::seed_from_u64(11);
    let report = rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.rigidity, Rigidity::IndependentFlexible);
    assert!(report.rank_check.is_none());
}

#[test]
fn zero_dimension_check_fails() {
    let graph = complete(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(12);
    assert!(rigidity_check(&graph, 0, &mut rng).is_err());
}

#[test]
fn rigidity_verdict_strings() {
    let graph = complete(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(13);
    let report = rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(
        report.to_string(),
        "Graph is minimally rigid in dimension 2."
    );

    let mut dependent = complete(4).unwrap();
    dependent.add_vertex();
    let report = rigidity_check(&dependent, 2, &mut rng).unwrap();
    assert_eq!(
        report.to_string(),
        "Graph is dependent and flexible in dimension 2. Rerun to double check."
    );
}

// ─── Size Classification Tests ────────────────────────────────

#[test]
fn size_classification() {
    assert_eq!(
        classify_size(&complete(2).unwrap(), 2),
        SizeClass::TooSmallComplete
    );
    assert_eq!(
        classify_size(&Graph::with_vertices(2), 2),
        SizeClass::TooSmallIncomplete
    );
    assert_eq!(
        classify_size(&complete(3).unwrap(), 2),
        SizeClass::NeedsRankTest
    );
}

// ─── Stress Tests ─────────────────────────────────────────────

#[test]
fn independent_graph_has_zero_stress() {
    let graph = cycle(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(14);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let sample = sample_stress(&rm, &mut rng).unwrap();
    assert_eq!(sample.nullity, 0);
    assert!(sample.stress.iter().all(|&s| s == 0.0));
}

#[test]
fn k4_in_plane_has_one_dimensional_stress_space() {
    let graph = complete(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(15);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let sample = sample_stress(&rm, &mut rng).unwrap();
    assert_eq!(sample.nullity, 1);
    assert_eq!(sample.stress.len(), 6);
}

#[test]
fn sampled_stress_is_an_equilibrium_load() {
    // x^T R = 0: zero net force at every vertex coordinate.
    let graph = complete(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(16);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let sample = sample_stress(&rm, &mut rng).unwrap();

    let m = rm.matrix();
    for col in 0..m.ncols() {
        let mut net: f64 = 0.0;
        for row in 0..m.nrows() {
            net += sample.stress[row] * m[(row, col)];
        }
        // The stress entries are O(100 * m * sigma), so allow scale.
        assert!(net.abs() < 1e-4, "Net force {net} in column {col}");
    }
}

#[test]
fn stress_matrix_rows_sum_to_zero() {
    let graph = complete(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(17);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let sample = sample_stress(&rm, &mut rng).unwrap();
    let omega = stress_matrix(&rm, &sample.stress).unwrap();

    for i in 0..4 {
        let row_sum: f64 = (0..4).map(|j| omega[(i, j)]).sum();
        assert!(row_sum.abs() < 1e-9, "Row {i} sums to {row_sum}");
        for j in 0..4 {
            assert_eq!(omega[(i, j)], omega[(j, i)]);
        }
    }
}

#[test]
fn stress_matrix_rejects_wrong_length() {
    let graph = complete(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(18);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    assert!(stress_matrix(&rm, &[1.0]).is_err());
}

#[test]
fn k4_stress_rank_meets_global_bound() {
    let graph = complete(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(19);
    let rm = RigidityMatrix::build(&graph, 2, &mut rng).unwrap();
    let sample = sample_stress(&rm, &mut rng).unwrap();
    let check = stress_rank_check(&rm, &sample.stress).unwrap();
    assert_eq!(check.bound, 1); // n - d - 1
    assert_eq!(check.rank, 1);
    assert!(check.globally_rigid);
    assert!(!check.test_failed);
}

// ─── Global Rigidity Tests ────────────────────────────────────

#[test]
fn k4_is_globally_rigid_in_plane() {
    let graph = complete(4).unwrap();
    for seed in 0..25 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = global_rigidity_check(&graph, 2, &mut rng).unwrap();
        assert_eq!(
            report.classification,
            GlobalRigidity::GloballyRigid,
            "Seed {seed}"
        );
        assert!(!report.rerun_advised);
    }
}

#[test]
fn triangle_is_globally_rigid_at_boundary_size() {
    // n = d + 1: rigid implies globally rigid without the stress test.
    let graph = complete(3).unwrap();
    let mut rng = SmallRng::seed_from_u64(20);
    let report = global_rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.classification, GlobalRigidity::GloballyRigid);
}

#[test]
fn four_cycle_is_not_globally_rigid() {
    let graph = cycle(4).unwrap();
    for seed in 0..25 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = global_rigidity_check(&graph, 2, &mut rng).unwrap();
        assert_eq!(
            report.classification,
            GlobalRigidity::NotGloballyRigid,
            "Seed {seed}"
        );
        assert!(report.rerun_advised);
    }
}

#[test]
fn path_is_not_globally_rigid_and_says_so_with_advisory() {
    let graph = path(4).unwrap();
    let mut rng = SmallRng::seed_from_u64(21);
    let report = global_rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.classification, GlobalRigidity::NotGloballyRigid);
    assert_eq!(
        report.to_string(),
        "Graph is not globally rigid in dimension 2. Rerun to double check."
    );
}

#[test]
fn single_bar_is_globally_rigid_without_randomness() {
    let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let mut rng = SmallRng::seed_from_u64(22);
    let report = global_rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.classification, GlobalRigidity::GloballyRigid);
    assert!(report.rank_check.is_none());
    assert!(!report.rerun_advised);
    assert_eq!(
        report.to_string(),
        "Graph is globally rigid in dimension 2."
    );
}

#[test]
fn undersized_incomplete_graph_is_not_globally_rigid_deterministically() {
    let graph = Graph::with_vertices(2);
    let mut rng = SmallRng::seed_from_u64(23);
    let report = global_rigidity_check(&graph, 2, &mut rng).unwrap();
    assert_eq!(report.classification, GlobalRigidity::NotGloballyRigid);
    assert!(!report.rerun_advised);
    assert_eq!(
        report.to_string(),
        "Graph is not globally rigid in dimension 2."
    );
}

// ─── Realization Count Tests ──────────────────────────────────

/// Backend double that returns fixed raw counts.
struct FixedCounter {
    sphere: u64,
    plane: u64,
}

impl RealizationCounter for FixedCounter {
    fn sphere_realizations(&self, _graph_number: u128) -> u64 {
        self.sphere
    }

    fn plane_realizations(&self, _graph_number: u128) -> u64 {
        self.plane
    }
}

#[test]
fn single_bar_reports_one_realization_each() {
    // The backend is not consulted for the 2-vertex/1-edge graph.
    let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let counter = FixedCounter {
        sphere: 999,
        plane: 999,
    };
    let counts = realization_counts(&graph, &counter).unwrap();
    assert_eq!(counts.sphere, 1);
    assert_eq!(counts.plane, 1);
}

#[test]
fn raw_counts_are_halved() {
    let graph = complete(3).unwrap();
    let counter = FixedCounter {
        sphere: 8,
        plane: 5,
    };
    let counts = realization_counts(&graph, &counter).unwrap();
    assert_eq!(counts.sphere, 4);
    assert_eq!(counts.plane, 2); // integer division
}

// ─── Workbench Tests ──────────────────────────────────────────

#[test]
fn workbench_builds_graph_interactively() {
    let config = AnalysisConfig {
        dimension: 2,
        seed: Some(42),
    };
    let mut bench = Workbench::new(&config).unwrap();
    for _ in 0..3 {
        bench.add_vertex();
    }
    bench.add_edge(0, 1).unwrap();
    bench.add_edge(1, 2).unwrap();
    bench.add_edge(0, 2).unwrap();

    let report = bench.rigidity_check().unwrap();
    assert_eq!(report.rigidity, Rigidity::MinimallyRigid);

    let global = bench.global_rigidity_check().unwrap();
    assert_eq!(global.classification, GlobalRigidity::GloballyRigid);
}

#[test]
fn workbench_is_reproducible_with_a_seed() {
    let config = AnalysisConfig {
        dimension: 2,
        seed: Some(7),
    };
    let graph = complete(4).unwrap();

    let mut a = Workbench::with_graph(graph.clone(), &config).unwrap();
    let mut b = Workbench::with_graph(graph, &config).unwrap();
    let ra = a.rigidity_check().unwrap();
    let rb = b.rigidity_check().unwrap();
    assert_eq!(ra.rigidity, rb.rigidity);
    assert_eq!(
        ra.rank_check.map(|c| c.rank),
        rb.rank_check.map(|c| c.rank)
    );
}

#[test]
fn workbench_dimension_management() {
    let mut bench = Workbench::new(&AnalysisConfig::planar()).unwrap();
    assert_eq!(bench.dimension(), 2);
    assert_eq!(bench.increase_dimension(), 3);
    assert_eq!(bench.decrease_dimension().unwrap(), 2);
    assert_eq!(bench.decrease_dimension().unwrap(), 1);
    assert!(bench.decrease_dimension().is_err());
    assert_eq!(bench.dimension(), 1);
}

#[test]
fn workbench_mutation_errors_are_typed() {
    let mut bench = Workbench::new(&AnalysisConfig::planar()).unwrap();
    bench.add_vertex();
    bench.add_vertex();
    assert!(bench.add_edge(0, 0).is_err());
    assert!(bench.add_edge(0, 9).is_err());
    assert!(bench.remove_edge(0, 1).is_err());
}

#[test]
fn config_round_trips_and_validates() {
    let config = AnalysisConfig {
        dimension: 3,
        seed: Some(11),
    };
    let json = serde_json::to_string(&config).unwrap();
    let recovered: AnalysisConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.dimension, 3);
    assert_eq!(recovered.seed, Some(11));

    let bad = AnalysisConfig {
        dimension: 0,
        seed: None,
    };
    assert!(bad.validate().is_err());
}
