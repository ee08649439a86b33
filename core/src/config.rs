//! config.rs
//! Pipeline configuration: which cipher, PRF and codec a forward/mirror
//! pair uses.
//!
//! The config is a plain serde value. Secrets are never part of it; they
//! are passed when the pipelines are built.

use serde::{Deserialize, Serialize};

use crate::compression::{CodecId, resolve};
use crate::crypto::{CipherKey, CipherSuite, KdfPrf};
use crate::pipeline::{mirror, Pipeline, Sink, StageSpec};
use crate::types::PipelineResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub cipher: CipherSuite,
    pub kdf: KdfPrf,
    pub codec: CodecId,
    /// Codec level; `None` picks the codec default.
    pub level: Option<i32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cipher: CipherSuite::Chacha20Poly1305,
            kdf: KdfPrf::Sha256,
            codec: CodecId::Zstd,
            level: None,
        }
    }
}

impl PipelineConfig {
    pub fn new(cipher: CipherSuite, codec: CodecId) -> Self {
        Self { cipher, codec, ..Self::default() }
    }

    pub fn with_kdf(mut self, kdf: KdfPrf) -> Self {
        self.kdf = kdf;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn from_json(doc: &str) -> PipelineResult<Self> {
        Ok(serde_json::from_str(doc)?)
    }

    pub fn to_json(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Level that will actually be used.
    pub fn effective_level(&self) -> i32 {
        self.level.unwrap_or(resolve(self.codec).default_level)
    }

    fn key(&self, secret: &[u8]) -> CipherKey {
        CipherKey::secret_with_prf(secret, self.kdf)
    }

    /// Encrypt, then compress.
    pub fn forward_specs(&self, secret: impl AsRef<[u8]>) -> Vec<StageSpec> {
        vec![
            StageSpec::Encrypt { suite: self.cipher, key: self.key(secret.as_ref()) },
            StageSpec::Compress { codec: self.codec, level: self.level },
        ]
    }

    /// Decompress, then decrypt.
    pub fn reverse_specs(&self, secret: impl AsRef<[u8]>) -> Vec<StageSpec> {
        mirror(&self.forward_specs(secret))
    }

    pub fn build_forward(&self, secret: impl AsRef<[u8]>) -> PipelineResult<Pipeline> {
        Pipeline::from_specs(&self.forward_specs(secret))
    }

    pub fn build_reverse(&self, secret: impl AsRef<[u8]>) -> PipelineResult<Pipeline> {
        Pipeline::from_specs(&self.reverse_specs(secret))
    }

    /// Forward pipeline terminating in a caller-held sink.
    pub fn build_forward_into(
        &self,
        secret: impl AsRef<[u8]>,
        sink: Sink,
    ) -> PipelineResult<Pipeline> {
        Pipeline::from_specs_with_sink(&self.forward_specs(secret), sink)
    }

    pub fn build_reverse_into(
        &self,
        secret: impl AsRef<[u8]>,
        sink: Sink,
    ) -> PipelineResult<Pipeline> {
        Pipeline::from_specs_with_sink(&self.reverse_specs(secret), sink)
    }
}
