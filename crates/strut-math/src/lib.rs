//! # strut-math
//!
//! Dense linear algebra kernels for the Strut rigidity engine.
//!
//! Provides:
//! - Re-exports of `faer` dense types (`Mat`, `Col`, etc.)
//! - SVD-based matrix rank with a tolerance threshold
//! - Left null-space basis extraction
//! - Eigenvalue spectra of symmetric matrices
//!
//! All kernels operate in `f64`: rank decisions compare singular values
//! against tolerances a few orders of magnitude above machine epsilon,
//! which single precision cannot resolve reliably.

pub mod null_space;
pub mod rank;
pub mod spectrum;

// Re-export faer dense types as the canonical matrix types for Strut.
pub use faer::{Col, Mat, MatRef};

pub use null_space::left_null_space;
pub use rank::rank;
pub use spectrum::self_adjoint_eigenvalues;
