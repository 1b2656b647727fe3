//! Scalar type alias for the engine.
//!
//! Rank and null-space decisions compare singular values against tight
//! tolerances, so all numeric work is done in `f64`. This alias makes it
//! easy to experiment with other precisions if needed.

/// The floating-point type used throughout the engine.
pub type Scalar = f64;
