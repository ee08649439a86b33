//! telemetry/counters.rs
//! Mutable counters filled while a pipeline runs.
//!
//! Converted into an immutable `TelemetrySnapshot` once the run ends.
use std::ops::AddAssign;

use crate::pipeline::StageKind;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct TelemetryCounters {
    pub invocations: u64,
    pub failures: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// Stage that aborted the most recent failed run.
    pub failed_stage: Option<StageKind>,
}

impl TelemetryCounters {
    /// Record a payload entering the head stage.
    pub fn add_input(&mut self, len: usize) {
        self.invocations += 1;
        self.bytes_in += len as u64;
    }

    /// Record a payload captured by the sink.
    pub fn add_output(&mut self, len: usize) {
        self.bytes_out += len as u64;
    }

    pub fn add_failure(&mut self, stage: StageKind) {
        self.failures += 1;
        self.failed_stage = Some(stage);
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.invocations += other.invocations;
        self.failures += other.failures;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        if other.failed_stage.is_some() {
            self.failed_stage = other.failed_stage;
        }
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
