//! Deflate (zlib wrapper) via flate2.

use std::io::Read;
use std::io::Write;
use flate2::{Compression, write::ZlibEncoder, read::ZlibDecoder};

use crate::compression::frame::{open_frame, seal_frame, verify_restored};
use crate::compression::types::{Codec, CodecError, CodecId};

const ID: CodecId = CodecId::Deflate;
const NAME: &str = ID.name();

#[derive(Debug, Clone)]
pub struct DeflateCodec {
    level: Compression,
}

impl DeflateCodec {
    /// Levels outside 0..=9 fall back to flate2's default.
    pub fn new(level: i32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level as u32),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Codec for DeflateCodec {
    fn id(&self) -> CodecId {
        ID
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        // Each payload is its own zlib stream
        let mut enc = ZlibEncoder::new(Vec::new(), self.level);
        enc.write_all(input)
            .map_err(|e| CodecError::CodecProcessFailed { codec: NAME, msg: e.to_string() })?;
        let compressed = enc.finish()
            .map_err(|e| CodecError::CodecProcessFailed { codec: NAME, msg: e.to_string() })?;

        seal_frame(ID, input, &compressed)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let parts = open_frame(ID, input)?;

        let mut restored = Vec::with_capacity(parts.declared_len);
        ZlibDecoder::new(parts.body)
            .take(parts.declared_len as u64 + 1)
            .read_to_end(&mut restored)
            .map_err(|e| CodecError::CodecProcessFailed { codec: NAME, msg: e.to_string() })?;

        verify_restored(&parts, &restored)?;
        Ok(restored)
    }
}
