//! pipeline/stage.rs
//! The generic stage node and the four built-in transforms.
//!
//! Stages forward and nothing else: no logging, retries or fallbacks. A
//! failed transform returns its error tagged with the stage kind and the
//! downstream node is never called.

use bytes::Bytes;

use crate::compression::{create_codec, Codec, CodecError, CodecId};
use crate::crypto::{AeadCipher, Cipher, CipherKey, CipherSuite, CryptoError};
use crate::pipeline::types::{Node, StageKind, Transform};
use crate::types::{TransformError, TransformFailure};

/// A transform plus exclusive ownership of the next node.
pub struct Stage {
    transform: Box<dyn Transform>,
    next: Box<dyn Node>,
}

impl Stage {
    pub fn new(transform: Box<dyn Transform>, next: Box<dyn Node>) -> Self {
        Self { transform, next }
    }

    pub fn kind(&self) -> StageKind {
        self.transform.kind()
    }
}

impl Node for Stage {
    fn process(&self, payload: &[u8]) -> Result<Bytes, TransformError> {
        let out = self
            .transform
            .apply(payload)
            .map_err(|source| TransformError { stage: self.transform.kind(), source })?;
        self.next.process(&out)
    }
}

// ---------------------------------------------------------------------------
// Cipher transforms
// ---------------------------------------------------------------------------

/// Encrypts with a cipher bound to one key for its lifetime.
pub struct EncryptTransform {
    cipher: Box<dyn Cipher>,
}

impl EncryptTransform {
    pub fn new(suite: CipherSuite, key: &CipherKey) -> Result<Self, CryptoError> {
        Ok(Self::with_cipher(Box::new(AeadCipher::new(suite, key)?)))
    }

    pub fn with_cipher(cipher: Box<dyn Cipher>) -> Self {
        Self { cipher }
    }
}

impl Transform for EncryptTransform {
    fn kind(&self) -> StageKind {
        StageKind::Encrypt
    }

    fn apply(&self, payload: &[u8]) -> Result<Vec<u8>, TransformFailure> {
        Ok(self.cipher.encrypt(payload)?)
    }
}

pub struct DecryptTransform {
    cipher: Box<dyn Cipher>,
}

impl DecryptTransform {
    pub fn new(suite: CipherSuite, key: &CipherKey) -> Result<Self, CryptoError> {
        Ok(Self::with_cipher(Box::new(AeadCipher::new(suite, key)?)))
    }

    pub fn with_cipher(cipher: Box<dyn Cipher>) -> Self {
        Self { cipher }
    }
}

impl Transform for DecryptTransform {
    fn kind(&self) -> StageKind {
        StageKind::Decrypt
    }

    fn apply(&self, payload: &[u8]) -> Result<Vec<u8>, TransformFailure> {
        Ok(self.cipher.decrypt(payload)?)
    }
}

// ---------------------------------------------------------------------------
// Codec transforms
// ---------------------------------------------------------------------------

pub struct CompressTransform {
    codec: Box<dyn Codec>,
}

impl CompressTransform {
    pub fn new(codec: CodecId, level: Option<i32>) -> Result<Self, CodecError> {
        Ok(Self::with_codec(create_codec(codec, level)?))
    }

    pub fn with_codec(codec: Box<dyn Codec>) -> Self {
        Self { codec }
    }
}

impl Transform for CompressTransform {
    fn kind(&self) -> StageKind {
        StageKind::Compress
    }

    fn apply(&self, payload: &[u8]) -> Result<Vec<u8>, TransformFailure> {
        Ok(self.codec.encode(payload)?)
    }
}

pub struct DecompressTransform {
    codec: Box<dyn Codec>,
}

impl DecompressTransform {
    pub fn new(codec: CodecId) -> Result<Self, CodecError> {
        Ok(Self::with_codec(create_codec(codec, None)?))
    }

    pub fn with_codec(codec: Box<dyn Codec>) -> Self {
        Self { codec }
    }
}

impl Transform for DecompressTransform {
    fn kind(&self) -> StageKind {
        StageKind::Decompress
    }

    fn apply(&self, payload: &[u8]) -> Result<Vec<u8>, TransformFailure> {
        Ok(self.codec.decode(payload)?)
    }
}
