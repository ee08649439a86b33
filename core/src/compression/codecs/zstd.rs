//! src/compression/codecs/zstd.rs
//!
//! Zstd codec.
//!
//! Design notes:
//! - Encodes with the bulk API (one standalone zstd frame per payload).
//! - Decodes through the streaming decoder capped at the declared length, so a
//!   forged frame cannot inflate past what its prefix announced.

use std::io::Read;

use crate::compression::frame::{open_frame, seal_frame, verify_restored};
use crate::compression::types::{Codec, CodecError, CodecId};

const ID: CodecId = CodecId::Zstd;
const NAME: &str = ID.name();

#[derive(Debug, Clone)]
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    /// # Errors
    /// - `CodecError::CodecInitFailed` if `level` is outside zstd's supported range.
    pub fn new(level: i32) -> Result<Self, CodecError> {
        if !zstd::compression_level_range().contains(&level) {
            return Err(CodecError::CodecInitFailed {
                codec: NAME,
                msg: format!("level {} out of range {:?}", level, zstd::compression_level_range()),
            });
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl Codec for ZstdCodec {
    fn id(&self) -> CodecId {
        ID
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let compressed = zstd::bulk::compress(input, self.level)
            .map_err(|e| CodecError::CodecProcessFailed { codec: NAME, msg: e.to_string() })?;
        seal_frame(ID, input, &compressed)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let parts = open_frame(ID, input)?;

        let decoder = zstd::stream::read::Decoder::new(parts.body)
            .map_err(|e| CodecError::CodecInitFailed { codec: NAME, msg: e.to_string() })?;

        // One extra byte so overlong output shows up as a length mismatch.
        let mut restored = Vec::with_capacity(parts.declared_len);
        decoder
            .take(parts.declared_len as u64 + 1)
            .read_to_end(&mut restored)
            .map_err(|e| CodecError::CodecProcessFailed { codec: NAME, msg: e.to_string() })?;

        verify_restored(&parts, &restored)?;
        Ok(restored)
    }
}
