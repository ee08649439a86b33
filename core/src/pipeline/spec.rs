//! pipeline/spec.rs
//! Declarative `(stage-kind, configuration)` pairs and their mirrors.

use crate::compression::CodecId;
use crate::crypto::{CipherKey, CipherSuite};
use crate::pipeline::stage::{
    CompressTransform, DecompressTransform, DecryptTransform, EncryptTransform,
};
use crate::pipeline::types::{StageKind, Transform};
use crate::types::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSpec {
    Encrypt { suite: CipherSuite, key: CipherKey },
    Decrypt { suite: CipherSuite, key: CipherKey },
    Compress { codec: CodecId, level: Option<i32> },
    Decompress { codec: CodecId },
}

impl StageSpec {
    pub fn kind(&self) -> StageKind {
        match self {
            StageSpec::Encrypt { .. } => StageKind::Encrypt,
            StageSpec::Decrypt { .. } => StageKind::Decrypt,
            StageSpec::Compress { .. } => StageKind::Compress,
            StageSpec::Decompress { .. } => StageKind::Decompress,
        }
    }

    /// Same configuration, opposite direction. Compression level is not
    /// needed to decode, so `Decompress` inverts to the codec default level.
    pub fn inverse(&self) -> StageSpec {
        match self {
            StageSpec::Encrypt { suite, key } => {
                StageSpec::Decrypt { suite: *suite, key: key.clone() }
            }
            StageSpec::Decrypt { suite, key } => {
                StageSpec::Encrypt { suite: *suite, key: key.clone() }
            }
            StageSpec::Compress { codec, .. } => StageSpec::Decompress { codec: *codec },
            StageSpec::Decompress { codec } => StageSpec::Compress { codec: *codec, level: None },
        }
    }

    /// Construct the transform this spec describes.
    pub fn build(&self) -> Result<Box<dyn Transform>, PipelineError> {
        let kind = self.kind();
        let transform: Box<dyn Transform> = match self {
            StageSpec::Encrypt { suite, key } => Box::new(
                EncryptTransform::new(*suite, key).map_err(|e| PipelineError::build(kind, e))?,
            ),
            StageSpec::Decrypt { suite, key } => Box::new(
                DecryptTransform::new(*suite, key).map_err(|e| PipelineError::build(kind, e))?,
            ),
            StageSpec::Compress { codec, level } => Box::new(
                CompressTransform::new(*codec, *level).map_err(|e| PipelineError::build(kind, e))?,
            ),
            StageSpec::Decompress { codec } => Box::new(
                DecompressTransform::new(*codec).map_err(|e| PipelineError::build(kind, e))?,
            ),
        };
        Ok(transform)
    }
}

/// Reverse order and invert each stage: `[T1, .., Tn]` becomes `[Tn⁻¹, .., T1⁻¹]`.
pub fn mirror(specs: &[StageSpec]) -> Vec<StageSpec> {
    specs.iter().rev().map(StageSpec::inverse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reverses_and_inverts() {
        let key = CipherKey::secret("abcde");
        let forward = vec![
            StageSpec::Encrypt { suite: CipherSuite::Aes256Gcm, key: key.clone() },
            StageSpec::Compress { codec: CodecId::Lz4, level: None },
        ];
        assert_eq!(
            mirror(&forward),
            vec![
                StageSpec::Decompress { codec: CodecId::Lz4 },
                StageSpec::Decrypt { suite: CipherSuite::Aes256Gcm, key },
            ]
        );
        assert_eq!(mirror(&mirror(&forward)), forward);
    }

    #[test]
    fn kinds_and_inverse_kinds_agree() {
        let spec = StageSpec::Compress { codec: CodecId::Zstd, level: Some(3) };
        assert_eq!(spec.kind().inverse(), Some(spec.inverse().kind()));
    }

    #[test]
    fn build_reports_failing_stage() {
        let spec = StageSpec::Encrypt { suite: CipherSuite::Aes256Gcm, key: CipherKey::secret("") };
        match spec.build() {
            Err(PipelineError::Build { stage, .. }) => assert_eq!(stage, StageKind::Encrypt),
            other => panic!("expected build error, got {:?}", other.map(|t| t.kind())),
        }
    }
}
