//! Equilibrium-stress sampling and the global-rigidity criterion.
//!
//! A self-stress is an element of the rigidity matrix's left null space:
//! an edge-load assignment with zero net force at every vertex. The
//! stress matrix folds a sampled stress back onto the vertices; its rank
//! against the generic bound n − d − 1 decides global rigidity.

use faer::Mat;
use rand::Rng;
use strut_graph::Graph;
use strut_types::constants::STRESS_RANGE_FACTOR;
use strut_types::{StrutError, StrutResult};

use crate::classify::{classify_size, SizeClass};
use crate::matrix::RigidityMatrix;
use crate::tester::{rank_check, RankCheck};

/// A stress vector drawn from the left null space, one entry per edge in
/// the rigidity matrix's canonical order.
#[derive(Debug, Clone)]
pub struct StressSample {
    /// The sampled equilibrium stress (all zeros when the space is trivial).
    pub stress: Vec<f64>,
    /// Dimension of the stress space the sample was drawn from.
    pub nullity: usize,
}

/// Draws a random equilibrium stress for a rigidity matrix.
///
/// The sample is a random integer-weighted combination of the null-space
/// basis vectors, with coefficients uniform on `{0, ..., 100 * m}`.
/// Combining the basis vectors, instead of returning one of them as-is,
/// avoids accidental structural degeneracies (such as zero entries) that
/// would break genericity. A full-row-rank matrix yields the zero stress.
pub fn sample_stress<R: Rng>(
    rigidity: &RigidityMatrix,
    rng: &mut R,
) -> StrutResult<StressSample> {
    let basis = strut_math::left_null_space(rigidity.matrix())?;
    let m = rigidity.edge_count();
    let nullity = basis.ncols();

    let mut stress = vec![0.0f64; m];
    if nullity > 0 {
        let upper = STRESS_RANGE_FACTOR * m as u64;
        // An all-zero draw would collapse a nontrivial stress space to the
        // zero stress and decide nothing; redraw until some weight is set.
        let mut coefficients = vec![0.0f64; nullity];
        while coefficients.iter().all(|&c| c == 0.0) {
            for coefficient in &mut coefficients {
                *coefficient = rng.gen_range(0..=upper) as f64;
            }
        }
        for (row, entry) in stress.iter_mut().enumerate() {
            *entry = (0..nullity)
                .map(|c| basis[(row, c)] * coefficients[c])
                .sum();
        }
    }

    Ok(StressSample { stress, nullity })
}

/// Builds the symmetric n×n stress matrix Ω of a stress vector.
///
/// Ω[v][v] is the sum of the stress over edges incident to v;
/// Ω[v][w] is −stress({v, w}) when {v, w} is an edge, 0 otherwise.
pub fn stress_matrix(rigidity: &RigidityMatrix, stress: &[f64]) -> StrutResult<Mat<f64>> {
    if stress.len() != rigidity.edge_count() {
        return Err(StrutError::InvalidConfig(format!(
            "Stress vector has {} entries but the matrix has {} edges",
            stress.len(),
            rigidity.edge_count()
        )));
    }

    let n = rigidity.vertex_count();
    let mut omega = Mat::zeros(n, n);
    for (row, edge) in rigidity.edges().iter().enumerate() {
        let (i, j) = edge.endpoints();
        let w = stress[row];
        omega[(i, j)] = -w;
        omega[(j, i)] = -w;
        omega[(i, i)] += w;
        omega[(j, j)] += w;
    }
    Ok(omega)
}

/// Outcome of a stress-matrix rank check.
#[derive(Debug, Clone, Copy)]
pub struct StressRankCheck {
    /// Numerical rank of the stress matrix.
    pub rank: usize,
    /// The generic global-rigidity bound n − d − 1 (clamped at zero).
    pub bound: usize,
    /// True when the rank meets the bound exactly.
    pub globally_rigid: bool,
    /// True when the rank exceeds the bound while being positive: the
    /// sample was degenerate, which says nothing about the graph.
    pub test_failed: bool,
}

/// Ranks the stress matrix of `stress` against the generic bound.
pub fn stress_rank_check(
    rigidity: &RigidityMatrix,
    stress: &[f64],
) -> StrutResult<StressRankCheck> {
    let omega = stress_matrix(rigidity, stress)?;
    let rank = strut_math::rank(&omega)?;

    let bound = rigidity.vertex_count() as i64 - rigidity.dimension() as i64 - 1;
    Ok(StressRankCheck {
        rank,
        bound: bound.max(0) as usize,
        globally_rigid: rank as i64 == bound,
        test_failed: rank as i64 > bound && rank > 0,
    })
}

/// Three-way global rigidity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalRigidity {
    /// The placement is unique up to rigid motion among generic
    /// placements with the same edge lengths.
    GloballyRigid,
    /// Some other generic placement realizes the same edge lengths.
    NotGloballyRigid,
    /// The sampled stress was degenerate (rank above the bound); the
    /// query decided nothing.
    Inconclusive,
}

/// Result of a full global-rigidity query.
#[derive(Debug, Clone)]
pub struct GlobalRigidityReport {
    /// The classification.
    pub classification: GlobalRigidity,
    /// Embedding dimension the query ran in.
    pub dimension: usize,
    /// The rigidity-matrix rank check, when one ran.
    pub rank_check: Option<RankCheck>,
    /// The stress-matrix rank check, when one ran.
    pub stress_check: Option<StressRankCheck>,
    /// Stress-space dimension the sample was drawn from, when one ran.
    pub stress_nullity: Option<usize>,
    /// True when the verdict rests on a single random sample and a
    /// repeat query is worthwhile.
    pub rerun_advised: bool,
}

impl std::fmt::Display for GlobalRigidityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.dimension;
        match self.classification {
            GlobalRigidity::GloballyRigid => {
                write!(f, "Graph is globally rigid in dimension {d}.")
            }
            GlobalRigidity::NotGloballyRigid => {
                write!(f, "Graph is not globally rigid in dimension {d}.")?;
                if self.rerun_advised {
                    write!(f, " Rerun to double check.")?;
                }
                Ok(())
            }
            GlobalRigidity::Inconclusive => {
                write!(
                    f,
                    "Global rigidity test failed: stress-matrix rank exceeds the \
                     generic bound. Rerun to double check."
                )
            }
        }
    }
}

/// Runs one global-rigidity query: rigidity pipeline, stress sample,
/// stress-matrix rank, classification.
///
/// Undersized graphs (n < d + 1) are settled deterministically: globally
/// rigid iff complete. A degenerate stress sample is reported as
/// [`GlobalRigidity::Inconclusive`], never as a negative verdict.
pub fn global_rigidity_check<R: Rng>(
    graph: &Graph,
    dimension: usize,
    rng: &mut R,
) -> StrutResult<GlobalRigidityReport> {
    if dimension == 0 {
        return Err(StrutError::InvalidDimension(
            "Embedding dimension must be at least 1".into(),
        ));
    }

    match classify_size(graph, dimension) {
        SizeClass::TooSmallComplete => Ok(GlobalRigidityReport {
            classification: GlobalRigidity::GloballyRigid,
            dimension,
            rank_check: None,
            stress_check: None,
            stress_nullity: None,
            rerun_advised: false,
        }),
        SizeClass::TooSmallIncomplete => Ok(GlobalRigidityReport {
            classification: GlobalRigidity::NotGloballyRigid,
            dimension,
            rank_check: None,
            stress_check: None,
            stress_nullity: None,
            rerun_advised: false,
        }),
        SizeClass::NeedsRankTest => {
            let rigidity_matrix = RigidityMatrix::build(graph, dimension, rng)?;
            let check = rank_check(&rigidity_matrix)?;
            let sample = sample_stress(&rigidity_matrix, rng)?;
            let stress_check = stress_rank_check(&rigidity_matrix, &sample.stress)?;

            let n = graph.vertex_count();
            let classification = if stress_check.test_failed {
                GlobalRigidity::Inconclusive
            } else if check.rigid && n <= dimension + 1 {
                GlobalRigidity::GloballyRigid
            } else if stress_check.globally_rigid && check.rigid {
                GlobalRigidity::GloballyRigid
            } else {
                GlobalRigidity::NotGloballyRigid
            };

            let rerun_advised = classification != GlobalRigidity::GloballyRigid;
            Ok(GlobalRigidityReport {
                classification,
                dimension,
                rank_check: Some(check),
                stress_check: Some(stress_check),
                stress_nullity: Some(sample.nullity),
                rerun_advised,
            })
        }
    }
}
