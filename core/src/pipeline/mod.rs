//! Reversible transform pipeline.
//!
//! ```text
//! forward:  [Encrypt] ──► [Compress]   ──► Sink
//! mirror:   [Decompress] ──► [Decrypt] ──► Sink
//! ```
//!
//! Each stage owns exactly one downstream node, so chains are linear and
//! built once. A pipeline is invoked synchronously on the calling thread.

pub mod types;
pub mod stage;
pub mod sink;
pub mod spec;
pub mod builder;
pub mod chain;
pub mod harness;

pub use types::{Node, StageKind, Transform};
pub use stage::{CompressTransform, DecompressTransform, DecryptTransform, EncryptTransform, Stage};
pub use sink::Sink;
pub use spec::{mirror, StageSpec};
pub use builder::PipelineBuilder;
pub use chain::Pipeline;
pub use harness::{default_fixtures, verify_mirror, verify_specs};
