//! telemetry/mod.rs
//! Per-invocation counters, timers, and immutable snapshots.
//!
//! Collected by the pipeline layer around a run, never inside stages.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
