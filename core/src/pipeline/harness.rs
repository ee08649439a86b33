//! pipeline/harness.rs
//! Fixture-driven check that a reverse pipeline undoes a forward one.
//!
//! Structure alone cannot tell a correct mirror from a wrong one (swapped
//! order, wrong key, wrong codec), so the check runs known payloads through
//! both chains and compares.

use crate::pipeline::chain::Pipeline;
use crate::pipeline::spec::{mirror, StageSpec};
use crate::types::{ConfigurationError, PipelineResult};

/// Payloads that exercise the usual edge cases: empty, one byte, text,
/// highly compressible, and incompressible.
pub fn default_fixtures() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x00],
        b"Hello World".to_vec(),
        vec![b'a'; 4096],
        (0..=255u8).cycle().take(1024).map(|b| b.wrapping_mul(167).wrapping_add(13)).collect(),
    ]
}

/// Run each fixture forward then through `reverse`; every fixture must come
/// back byte-for-byte.
pub fn verify_mirror<P: AsRef<[u8]>>(
    forward: &Pipeline,
    reverse: &Pipeline,
    fixtures: &[P],
) -> Result<(), ConfigurationError> {
    if fixtures.is_empty() {
        return Err(ConfigurationError::NoFixtures);
    }

    for (fixture, payload) in fixtures.iter().enumerate() {
        let payload = payload.as_ref();

        let encoded = forward
            .run(payload)
            .map_err(|source| ConfigurationError::ForwardFailed { fixture, source })?;

        let restored = reverse.run(&encoded).map_err(|source| {
            tracing::warn!(fixture, stage = %source.stage, "mirror rejected forward output");
            ConfigurationError::ReverseFailed { fixture, source }
        })?;

        if restored.as_ref() != payload {
            tracing::warn!(
                fixture,
                expected = payload.len(),
                actual = restored.len(),
                "mirror output differs"
            );
            return Err(ConfigurationError::Mismatch {
                fixture,
                expected_len: payload.len(),
                actual_len: restored.len(),
            });
        }
        tracing::debug!(
            fixture,
            bytes = payload.len(),
            encoded = encoded.len(),
            "fixture round-tripped"
        );
    }
    Ok(())
}

/// Build `specs` and their [`mirror`], then [`verify_mirror`] over `fixtures`.
pub fn verify_specs<P: AsRef<[u8]>>(specs: &[StageSpec], fixtures: &[P]) -> PipelineResult<()> {
    let forward = Pipeline::from_specs(specs)?;
    let reverse = Pipeline::from_specs(&mirror(specs))?;
    verify_mirror(&forward, &reverse, fixtures)?;
    Ok(())
}
