//! layerpipe-core
//!
//! Reversible transform pipeline: cipher and codec stages chained head to
//! tail into a sink, with a mirror pipeline that undoes them.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Transform primitives
pub mod compression;
pub mod crypto;

pub mod pipeline;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{Codec, CodecError, CodecId};
    pub use crate::config::PipelineConfig;
    pub use crate::crypto::{Cipher, CipherKey, CipherSuite, CryptoError, KdfPrf};
    pub use crate::pipeline::{
        mirror, verify_mirror, verify_specs, Pipeline, PipelineBuilder, Sink, StageKind, StageSpec,
        Transform,
    };
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::{
        ConfigurationError, PipelineError, PipelineResult, TransformError, TransformFailure,
    };
}
