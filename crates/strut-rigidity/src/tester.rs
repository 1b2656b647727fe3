//! Rank-based rigidity classification.
//!
//! Every check returns its result directly as a value rather than
//! leaving flags in mutable state, so a report can never read stale
//! flags from an earlier query.

use rand::Rng;
use strut_graph::Graph;
use strut_types::{StrutError, StrutResult};

use crate::classify::{classify_size, SizeClass};
use crate::matrix::RigidityMatrix;

/// Outcome of a rigidity-matrix rank check.
#[derive(Debug, Clone, Copy)]
pub struct RankCheck {
    /// Numerical rank of the rigidity matrix.
    pub rank: usize,
    /// True when every row is linearly independent (rank == |E|):
    /// no redundant constraint, in the matroid sense.
    pub independent: bool,
    /// True when the rank reaches d·n − d(d+1)/2: the coordinate degrees
    /// of freedom minus the dimension of the isometry group.
    pub rigid: bool,
}

/// Computes the rank of a rigidity matrix and derives both flags.
pub fn rank_check(rigidity: &RigidityMatrix) -> StrutResult<RankCheck> {
    let rank = strut_math::rank(rigidity.matrix())?;
    let n = rigidity.vertex_count();
    let d = rigidity.dimension();

    // The target can be negative for tiny graphs; compare in signed space.
    let rigid_target = (d * n) as i64 - (d * (d + 1) / 2) as i64;

    Ok(RankCheck {
        rank,
        independent: rank == rigidity.edge_count(),
        rigid: rank as i64 == rigid_target,
    })
}

/// Four-way generic rigidity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rigidity {
    /// Independent and rigid: exactly enough constraints.
    MinimallyRigid,
    /// Independent but short of the rigidity rank.
    IndependentFlexible,
    /// Rigid with redundant constraints.
    DependentRigid,
    /// Neither independent nor rigid. A single random sample can land
    /// here spuriously with measure-zero probability, so the verdict
    /// carries a rerun advisory.
    DependentFlexible,
}

/// Result of a full rigidity query.
#[derive(Debug, Clone)]
pub struct RigidityReport {
    /// The classification.
    pub rigidity: Rigidity,
    /// Embedding dimension the query ran in.
    pub dimension: usize,
    /// The rank check behind the verdict; `None` when the graph was
    /// undersized and settled by edge counting (no randomness involved).
    pub rank_check: Option<RankCheck>,
}

impl RigidityReport {
    /// True when the verdict rests on a single random sample that could
    /// (with measure-zero probability) have been unlucky.
    pub fn rerun_advised(&self) -> bool {
        self.rigidity == Rigidity::DependentFlexible
    }
}

impl std::fmt::Display for RigidityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d = self.dimension;
        match self.rigidity {
            Rigidity::MinimallyRigid => {
                write!(f, "Graph is minimally rigid in dimension {d}.")
            }
            Rigidity::IndependentFlexible => {
                write!(f, "Graph is independent and flexible in dimension {d}.")
            }
            Rigidity::DependentRigid => {
                write!(f, "Graph is dependent and rigid in dimension {d}.")
            }
            Rigidity::DependentFlexible => {
                write!(
                    f,
                    "Graph is dependent and flexible in dimension {d}. Rerun to double check."
                )
            }
        }
    }
}

/// Runs one rigidity query: samples a placement, builds the rigidity
/// matrix, checks its rank, and classifies.
///
/// Undersized graphs (n < d + 1) are settled deterministically by edge
/// counting: minimally rigid iff complete, otherwise independent and
/// flexible.
pub fn rigidity_check<R: Rng>(
    graph: &Graph,
    dimension: usize,
    rng: &mut R,
) -> StrutResult<RigidityReport> {
    if dimension == 0 {
        return Err(StrutError::InvalidDimension(
            "Embedding dimension must be at least 1".into(),
        ));
    }

    match classify_size(graph, dimension) {
        SizeClass::TooSmallComplete => Ok(RigidityReport {
            rigidity: Rigidity::MinimallyRigid,
            dimension,
            rank_check: None,
        }),
        SizeClass::TooSmallIncomplete => Ok(RigidityReport {
            rigidity: Rigidity::IndependentFlexible,
            dimension,
            rank_check: None,
        }),
        SizeClass::NeedsRankTest => {
            let rigidity_matrix = RigidityMatrix::build(graph, dimension, rng)?;
            let check = rank_check(&rigidity_matrix)?;
            let rigidity = match (check.independent, check.rigid) {
                (true, true) => Rigidity::MinimallyRigid,
                (true, false) => Rigidity::IndependentFlexible,
                (false, true) => Rigidity::DependentRigid,
                (false, false) => Rigidity::DependentFlexible,
            };
            Ok(RigidityReport {
                rigidity,
                dimension,
                rank_check: Some(check),
            })
        }
    }
}
