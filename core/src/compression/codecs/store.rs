//! codecs/store.rs
//! Pass-through codec: frames the payload unchanged.

use crate::compression::frame::{open_frame, seal_frame, verify_restored};
use crate::compression::types::{Codec, CodecError, CodecId};

const ID: CodecId = CodecId::Store;

#[derive(Debug, Clone, Default)]
pub struct StoreCodec;

impl StoreCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for StoreCodec {
    fn id(&self) -> CodecId {
        ID
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        seal_frame(ID, input, input)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        let parts = open_frame(ID, input)?;
        verify_restored(&parts, parts.body)?;
        Ok(parts.body.to_vec())
    }
}
