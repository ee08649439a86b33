use thiserror::Error;

use crate::{
    compression::CodecError,
    crypto::CryptoError,
    pipeline::StageKind,
};

/// Failure raised by a single transform, before stage identity is attached.
#[derive(Debug, Error)]
pub enum TransformFailure {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// A stage failed; nothing was forwarded past it.
#[derive(Debug, Error)]
#[error("{stage} stage failed: {source}")]
pub struct TransformError {
    pub stage: StageKind,
    #[source]
    pub source: TransformFailure,
}

impl TransformError {
    pub fn new(stage: StageKind, source: impl Into<TransformFailure>) -> Self {
        Self { stage, source: source.into() }
    }

    pub fn is_crypto(&self) -> bool {
        matches!(self.source, TransformFailure::Crypto(_))
    }

    pub fn is_codec(&self) -> bool {
        matches!(self.source, TransformFailure::Codec(_))
    }

    pub fn crypto(&self) -> Option<&CryptoError> {
        match &self.source {
            TransformFailure::Crypto(e) => Some(e),
            TransformFailure::Codec(_) => None,
        }
    }

    pub fn codec(&self) -> Option<&CodecError> {
        match &self.source {
            TransformFailure::Codec(e) => Some(e),
            TransformFailure::Crypto(_) => None,
        }
    }
}

/// A forward/mirror pair failed a known-good fixture.
///
/// Only observable by running fixtures; the pipeline never checks structure.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no fixtures supplied for mirror verification")]
    NoFixtures,

    #[error("forward pipeline failed on fixture {fixture}: {source}")]
    ForwardFailed {
        fixture: usize,
        #[source]
        source: TransformError,
    },

    #[error("mirror pipeline failed on fixture {fixture}: {source}")]
    ReverseFailed {
        fixture: usize,
        #[source]
        source: TransformError,
    },

    #[error(
        "mirror pipeline restored {actual_len} bytes for fixture {fixture} \
         ({expected_len} expected) with different content"
    )]
    Mismatch { fixture: usize, expected_len: usize, actual_len: usize },
}

/// Top-level error for building and verifying pipelines.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage failed while processing a payload.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// A stage could not be constructed (bad key material, bad codec level).
    #[error("cannot build {stage} stage: {source}")]
    Build {
        stage: StageKind,
        #[source]
        source: TransformFailure,
    },

    #[error("pipeline configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Configuration document could not be parsed.
    #[error("invalid pipeline config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn build(stage: StageKind, source: impl Into<TransformFailure>) -> Self {
        PipelineError::Build { stage, source: source.into() }
    }
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
