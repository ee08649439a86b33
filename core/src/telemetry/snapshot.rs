//! telemetry/snapshot.rs
//!
//! Immutable view of one (or several merged) pipeline runs.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::pipeline::StageKind;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::TelemetryTimer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Stage names, head first.
    pub stages: Vec<String>,
    pub invocations: u64,
    pub failures: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// `bytes_out / bytes_in`; above 1.0 when framing outweighs compression.
    pub size_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub failed_stage: Option<String>,
}

impl TelemetrySnapshot {
    pub fn from(
        stages: &[StageKind],
        counters: &TelemetryCounters,
        timer: &TelemetryTimer,
    ) -> Self {
        let elapsed = timer.elapsed();

        let size_ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            stages: stages.iter().map(ToString::to_string).collect(),
            invocations: counters.invocations,
            failures: counters.failures,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            size_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            failed_stage: counters.failed_stage.map(|s| s.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failures == 0
    }

    /// Serialize for logs or external collectors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
