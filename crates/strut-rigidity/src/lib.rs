//! # strut-rigidity
//!
//! Randomized generic rigidity analysis: placements, rigidity matrices,
//! rank classification, equilibrium-stress sampling, and the
//! stress-matrix criterion for global rigidity.
//!
//! ## Key Types
//!
//! - [`Placement`] — ephemeral random embedding of a vertex set in R^d
//! - [`RigidityMatrix`] — generic rigidity matrix with its canonical edge order
//! - [`RankCheck`] / [`RigidityReport`] — independence/rigidity classification
//! - [`StressRankCheck`] / [`GlobalRigidityReport`] — global-rigidity verdict
//! - [`RealizationCounter`] — seam for the external realization-counting backend
//! - [`Workbench`] — long-lived session facade consumed by interactive front ends
//!
//! Rigidity is a *generic* property: every query samples a fresh random
//! placement, so verdicts are probabilistic with measure-zero failure
//! odds. Reports that depend on a single unlucky sample say so and ask
//! the caller to rerun.

pub mod classify;
pub mod config;
pub mod matrix;
pub mod placement;
pub mod realization;
pub mod session;
pub mod stress;
pub mod tester;

pub use classify::SizeClass;
pub use config::AnalysisConfig;
pub use matrix::RigidityMatrix;
pub use placement::Placement;
pub use realization::{realization_counts, RealizationCounter, RealizationCounts};
pub use session::Workbench;
pub use stress::{
    global_rigidity_check, sample_stress, stress_matrix, stress_rank_check, GlobalRigidity,
    GlobalRigidityReport, StressRankCheck, StressSample,
};
pub use tester::{rank_check, rigidity_check, RankCheck, Rigidity, RigidityReport};
