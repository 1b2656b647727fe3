//! Analysis input validation.
//!
//! Validates inputs before the engine receives them, catching data-level
//! errors early with clear diagnostics.

use std::collections::BTreeSet;

use strut_types::{StrutError, StrutResult};

use crate::contract::{AnalysisInput, AnalysisParams, GraphInput};

/// Validates a complete analysis input.
///
/// Checks:
/// - Edge endpoints reference existing vertices
/// - No self-loops and no duplicate edges
/// - Parameters are usable (dimension ≥ 1, trials ≥ 1)
pub fn validate_input(input: &AnalysisInput) -> StrutResult<()> {
    validate_graph(&input.graph)?;
    validate_params(&input.params)?;
    Ok(())
}

/// Validates a graph description.
pub fn validate_graph(graph: &GraphInput) -> StrutResult<()> {
    let n = graph.vertex_count;
    let mut seen: BTreeSet<(usize, usize)> = BTreeSet::new();

    for (idx, &[a, b]) in graph.edges.iter().enumerate() {
        if a == b {
            return Err(StrutError::InvalidEdge(format!(
                "Edge {idx} is a self-loop on vertex {a}"
            )));
        }
        if a >= n || b >= n {
            return Err(StrutError::InvalidEdge(format!(
                "Edge {idx} [{a}, {b}] is out of range (vertex count: {n})"
            )));
        }
        let key = (a.min(b), a.max(b));
        if !seen.insert(key) {
            return Err(StrutError::InvalidEdge(format!(
                "Edge {idx} [{a}, {b}] appears more than once"
            )));
        }
    }

    Ok(())
}

/// Validates analysis parameters.
pub fn validate_params(params: &AnalysisParams) -> StrutResult<()> {
    if params.dimension == 0 {
        return Err(StrutError::InvalidDimension(
            "Embedding dimension must be at least 1".into(),
        ));
    }
    if params.trials == 0 {
        return Err(StrutError::InvalidConfig(
            "Trial count must be at least 1".into(),
        ));
    }
    Ok(())
}
