//! compression/types.rs
//! Codec ids, the `Codec` trait and its error type.
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::codec_ids;
use crate::utils::enum_name_or_hex;

/// Codec identifiers.
#[repr(u16)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize,
)]
pub enum CodecId {
    Store = codec_ids::STORE,
    #[default]
    Zstd = codec_ids::ZSTD,
    Lz4 = codec_ids::LZ4,
    Deflate = codec_ids::DEFLATE,
}

impl CodecId {
    /// Map a raw frame id back to a codec.
    pub fn verify(raw: u16) -> Result<Self, CodecError> {
        Self::try_from_primitive(raw).map_err(|_| CodecError::UnsupportedCodec { codec_id: raw })
    }

    pub const fn name(self) -> &'static str {
        match self {
            CodecId::Store => "store",
            CodecId::Zstd => "zstd",
            CodecId::Lz4 => "lz4",
            CodecId::Deflate => "deflate",
        }
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported compression codec: {}", enum_name_or_hex::<CodecId>(*codec_id))]
    UnsupportedCodec { codec_id: u16 },

    /// Frame written by a different codec than the one decoding it.
    #[error("codec {codec} cannot decode a {found} frame")]
    CodecMismatch { codec: &'static str, found: &'static str },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: &'static str, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    /// Encoded input shorter than the frame overhead.
    #[error("codec {codec} input truncated: {len} < {min}")]
    Truncated { codec: &'static str, len: usize, min: usize },

    #[error("codec {codec} decoded {actual} bytes, frame declared {declared}")]
    LengthMismatch { codec: &'static str, declared: usize, actual: usize },

    #[error("codec {codec} checksum mismatch: expected={expected:#010x}, actual={actual:#010x}")]
    ChecksumMismatch { codec: &'static str, expected: u32, actual: u32 },

    #[error("payload too large: {len} > {max}")]
    PayloadTooLarge { len: usize, max: usize },
}

/// Lossless byte codec. Stateless: one instance may serve many threads.
pub trait Codec: Send + Sync {
    fn id(&self) -> CodecId;
    /// Compress `input` into a self-describing frame.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
    /// Restore the bytes passed to [`Codec::encode`].
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError>;
}
