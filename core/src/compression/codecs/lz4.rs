//! codecs/lz4.rs
//! LZ4 block codec (lz4_flex, safe decoder).
use lz4_flex::block::{compress, decompress};

use crate::compression::frame::{open_frame, seal_frame, verify_restored};
use crate::compression::types::{Codec, CodecError, CodecId};

const ID: CodecId = CodecId::Lz4;
const NAME: &str = ID.name();

/// LZ4 block API has no levels or dictionaries here; every payload is one block.
#[derive(Debug, Clone, Default)]
pub struct Lz4Codec;

impl Lz4Codec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for Lz4Codec {
    fn id(&self) -> CodecId {
        ID
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        seal_frame(ID, input, &compress(input))
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let parts = open_frame(ID, input)?;

        let restored = decompress(parts.body, parts.declared_len)
            .map_err(|e| CodecError::CodecProcessFailed { codec: NAME, msg: e.to_string() })?;

        verify_restored(&parts, &restored)?;
        Ok(restored)
    }
}
