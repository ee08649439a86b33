//! pipeline/builder.rs
//! Explicit head-to-tail composition of a pipeline.

use crate::compression::CodecId;
use crate::crypto::{CipherKey, CipherSuite};
use crate::pipeline::chain::Pipeline;
use crate::pipeline::sink::Sink;
use crate::pipeline::spec::StageSpec;
use crate::pipeline::stage::Stage;
use crate::pipeline::types::{Node, StageKind, Transform};
use crate::types::PipelineResult;

enum Step {
    Spec(StageSpec),
    Custom(Box<dyn Transform>),
}

/// Collects stages in execution order; `build` links them tail-first.
///
/// No check is made that a reverse pipeline really inverts a forward one.
#[derive(Default)]
pub struct PipelineBuilder {
    steps: Vec<Step>,
    sink: Option<Sink>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encrypt(self, suite: CipherSuite, key: CipherKey) -> Self {
        self.stage(StageSpec::Encrypt { suite, key })
    }

    pub fn decrypt(self, suite: CipherSuite, key: CipherKey) -> Self {
        self.stage(StageSpec::Decrypt { suite, key })
    }

    pub fn compress(self, codec: CodecId, level: Option<i32>) -> Self {
        self.stage(StageSpec::Compress { codec, level })
    }

    pub fn decompress(self, codec: CodecId) -> Self {
        self.stage(StageSpec::Decompress { codec })
    }

    pub fn stage(mut self, spec: StageSpec) -> Self {
        self.steps.push(Step::Spec(spec));
        self
    }

    /// Append a caller-supplied transform.
    pub fn transform(mut self, transform: Box<dyn Transform>) -> Self {
        self.steps.push(Step::Custom(transform));
        self
    }

    /// Terminate in `sink` instead of a fresh one.
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Construct every transform (first failure wins), then link the chain.
    pub fn build(self) -> PipelineResult<Pipeline> {
        let sink = self.sink.unwrap_or_default();

        let transforms = self
            .steps
            .into_iter()
            .map(|step| match step {
                Step::Spec(spec) => spec.build(),
                Step::Custom(transform) => Ok(transform),
            })
            .collect::<PipelineResult<Vec<_>>>()?;

        let stages: Vec<StageKind> = transforms.iter().map(|t| t.kind()).collect();

        let mut next: Box<dyn Node> = Box::new(sink.clone());
        for transform in transforms.into_iter().rev() {
            next = Box::new(Stage::new(transform, next));
        }

        tracing::debug!(?stages, "pipeline built");
        Ok(Pipeline::assemble(next, sink, stages))
    }
}
