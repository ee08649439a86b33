use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::types::{TransformError, TransformFailure};

/// Identity of a stage, reported with every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StageKind {
    Encrypt,
    Decrypt,
    Compress,
    Decompress,
    /// Caller-supplied transform.
    Custom(&'static str),
}

impl StageKind {
    /// The kind that undoes this one; custom kinds have no known inverse.
    pub fn inverse(self) -> Option<StageKind> {
        match self {
            StageKind::Encrypt => Some(StageKind::Decrypt),
            StageKind::Decrypt => Some(StageKind::Encrypt),
            StageKind::Compress => Some(StageKind::Decompress),
            StageKind::Decompress => Some(StageKind::Compress),
            StageKind::Custom(_) => None,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StageKind::Encrypt => "encrypt",
            StageKind::Decrypt => "decrypt",
            StageKind::Compress => "compress",
            StageKind::Decompress => "decompress",
            StageKind::Custom(name) => name,
        };
        f.write_str(name)
    }
}

/// A link in a chain: either a [`Stage`](super::Stage) or the [`Sink`](super::Sink).
pub trait Node: Send + Sync {
    /// Consume `payload`, running the rest of the chain to completion or to
    /// the first failure. Returns what the sink recorded for this payload.
    fn process(&self, payload: &[u8]) -> Result<Bytes, TransformError>;
}

/// One reversible byte transform. Pure: same configuration and input give
/// the same output, and the input is never modified.
pub trait Transform: Send + Sync {
    fn kind(&self) -> StageKind;
    fn apply(&self, payload: &[u8]) -> Result<Vec<u8>, TransformFailure>;
}
