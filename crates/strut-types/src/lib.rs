//! # strut-types
//!
//! Shared types, identifiers, error taxonomy, and numeric constants
//! for the Strut rigidity analysis engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Strut crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{StrutError, StrutResult};
pub use ids::Edge;
pub use scalar::Scalar;
