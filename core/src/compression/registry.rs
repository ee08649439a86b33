//! compression/registry.rs
//! Codec registry and factory.

use crate::compression::codecs::{DeflateCodec, Lz4Codec, StoreCodec, ZstdCodec};
use crate::compression::constants::{DEFAULT_LEVEL_DEFLATE, DEFAULT_LEVEL_LZ4, DEFAULT_LEVEL_ZSTD};
use crate::compression::types::{Codec, CodecError, CodecId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    pub supports_level: bool,
    pub default_level: i32,
}

pub fn resolve(codec: CodecId) -> CodecInfo {
    let (supports_level, default_level) = match codec {
        CodecId::Store => (false, 0),
        CodecId::Zstd => (true, DEFAULT_LEVEL_ZSTD),
        CodecId::Lz4 => (false, DEFAULT_LEVEL_LZ4),
        CodecId::Deflate => (true, DEFAULT_LEVEL_DEFLATE),
    };
    CodecInfo { name: codec.name(), supports_level, default_level }
}

/// Build a codec. `level` is ignored by codecs without levels.
pub fn create_codec(codec: CodecId, level: Option<i32>) -> Result<Box<dyn Codec>, CodecError> {
    let level = level.unwrap_or(resolve(codec).default_level);
    match codec {
        CodecId::Store => Ok(Box::new(StoreCodec::new())),
        CodecId::Zstd => Ok(Box::new(ZstdCodec::new(level)?)),
        CodecId::Lz4 => Ok(Box::new(Lz4Codec::new())),
        CodecId::Deflate => Ok(Box::new(DeflateCodec::new(level))),
    }
}
