//! # strut-telemetry
//!
//! Event bus for analysis telemetry. Emits structured events
//! (placements sampled, ranks computed, stresses drawn, verdicts) that
//! can be consumed by pluggable sinks (collection buffers, `tracing`
//! output, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::AnalysisEvent;
