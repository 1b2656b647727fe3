//! Numeric constants and analysis defaults.

/// Default embedding dimension for rigidity queries (the plane).
pub const DEFAULT_DIMENSION: usize = 2;

/// Placement coordinates are drawn uniformly from `{0, ..., FACTOR * n}`.
///
/// The range grows with the vertex count so the probability of an
/// accidental algebraic coincidence among the sampled coordinates
/// vanishes as the graph grows.
pub const COORDINATE_RANGE_FACTOR: u64 = 100;

/// Stress combination coefficients are drawn uniformly from `{0, ..., FACTOR * m}`.
pub const STRESS_RANGE_FACTOR: u64 = 100;

/// Residual threshold for accepting a computed null-space basis vector.
///
/// Measured as `max |x^T M|` relative to the largest singular value.
pub const NULL_SPACE_RESIDUAL_TOLERANCE: f64 = 1.0e-8;
