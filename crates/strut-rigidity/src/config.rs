//! Analysis configuration.
//!
//! Parameters that control a rigidity session: the embedding dimension
//! and the RNG seed for reproducible queries.

use serde::{Deserialize, Serialize};
use strut_types::{StrutError, StrutResult};

/// Configuration for a rigidity analysis session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Embedding dimension d for rigidity queries. Must be at least 1.
    pub dimension: usize,

    /// Seed for the session RNG. `None` seeds from entropy; set it to
    /// make every query reproducible.
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dimension: strut_types::constants::DEFAULT_DIMENSION,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    /// Creates a config for planar (d = 2) analysis.
    pub fn planar() -> Self {
        Self {
            dimension: 2,
            ..Default::default()
        }
    }

    /// Creates a config for spatial (d = 3) analysis.
    pub fn spatial() -> Self {
        Self {
            dimension: 3,
            ..Default::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StrutResult<()> {
        if self.dimension == 0 {
            return Err(StrutError::InvalidDimension(
                "Embedding dimension must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
