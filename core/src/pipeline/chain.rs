//! pipeline/chain.rs
//! An assembled, immutable chain from head stage to sink.

use std::fmt;

use bytes::Bytes;

use crate::pipeline::builder::PipelineBuilder;
use crate::pipeline::sink::Sink;
use crate::pipeline::spec::StageSpec;
use crate::pipeline::types::{Node, StageKind};
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{PipelineResult, TransformError};

/// Head of a linear chain of stages ending in a [`Sink`].
///
/// There is no API to insert, remove, or reorder stages; build a new
/// pipeline to change behavior. All nodes are `Send + Sync`, so one
/// pipeline can be invoked from several threads.
pub struct Pipeline {
    head: Box<dyn Node>,
    sink: Sink,
    stages: Vec<StageKind>,
}

impl Pipeline {
    pub(crate) fn assemble(head: Box<dyn Node>, sink: Sink, stages: Vec<StageKind>) -> Self {
        Self { head, sink, stages }
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Build from an ordered list of stage specs, ending in a fresh sink.
    pub fn from_specs(specs: &[StageSpec]) -> PipelineResult<Self> {
        Self::from_specs_with_sink(specs, Sink::new())
    }

    pub fn from_specs_with_sink(specs: &[StageSpec], sink: Sink) -> PipelineResult<Self> {
        specs
            .iter()
            .cloned()
            .fold(PipelineBuilder::new(), PipelineBuilder::stage)
            .sink(sink)
            .build()
    }

    /// Push `payload` through every stage into the sink.
    ///
    /// Runs to completion or to the first failing stage on the calling
    /// thread. On failure the sink is left untouched.
    pub fn process(&self, payload: &[u8]) -> Result<(), TransformError> {
        self.run(payload).map(drop)
    }

    /// Process `payload` and return the bytes the sink recorded for it.
    ///
    /// The result travels back up the chain with the call, so concurrent
    /// callers and other holders of the sink cannot swap or take it first.
    pub fn run(&self, payload: &[u8]) -> Result<Bytes, TransformError> {
        tracing::debug!(stages = self.stages.len(), bytes = payload.len(), "pipeline invoked");
        self.head.process(payload).map_err(|e| {
            tracing::warn!(stage = %e.stage, error = %e, "pipeline aborted");
            e
        })
    }

    /// [`Pipeline::run`] plus a telemetry snapshot of the invocation.
    pub fn run_with_telemetry(
        &self,
        payload: &[u8],
    ) -> (Result<Bytes, TransformError>, TelemetrySnapshot) {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        counters.add_input(payload.len());
        let result = self.run(payload);
        timer.finish();

        match &result {
            Ok(out) => counters.add_output(out.len()),
            Err(e) => counters.add_failure(e.stage),
        }

        let snapshot = TelemetrySnapshot::from(&self.stages, &counters, &timer);
        (result, snapshot)
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Last payload captured by the sink.
    pub fn output(&self) -> Option<Bytes> {
        self.sink.latest()
    }

    /// Stage kinds, head first.
    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .field("sink", &self.sink)
            .finish()
    }
}
