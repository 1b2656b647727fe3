//! Error types for the Strut engine.
//!
//! All crates return `StrutResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Strut engine.
#[derive(Debug, Error)]
pub enum StrutError {
    /// Edge refers to a missing vertex, is a self-loop, or is absent on removal.
    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    /// Embedding dimension is zero or would become zero.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Operation needs at least one vertex or edge but the graph has none.
    #[error("Empty graph: {0}")]
    EmptyGraph(String),

    /// Rank or null-space computation is ambiguous beyond tolerance.
    #[error("Numerically degenerate: {0}")]
    NumericDegenerate(String),

    /// Input is outside the range the implementation supports.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, StrutError>`.
pub type StrutResult<T> = Result<T, StrutError>;
