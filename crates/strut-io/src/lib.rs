//! # strut-io
//!
//! Analysis input/output contract types and input validation.
//!
//! These types define the I/O boundary of the Strut engine: a graph
//! description, analysis parameters, and the report a query produces,
//! all serializable for API transport and CLI use.

pub mod contract;
pub mod validator;

pub use contract::{AnalysisInput, AnalysisParams, AnalysisReport, GraphInput};
pub use validator::validate_input;
