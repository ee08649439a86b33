//! compression/frame.rs
//! Frame wrapper shared by every codec.
//!
//! Layout (little-endian):
//! ```text
//! orig_len: u32 | codec_id: u16 | body: codec bytes | crc32(orig): u32
//! ```
//! The length lets decoders size their output up front and reject absurd
//! declarations before allocating. The codec id makes a frame fed to the
//! wrong decoder fail as such instead of as a corrupt body. The trailer
//! catches corruption that the codec itself would decode "successfully".

use crate::compression::constants::{
    FRAME_LEN_FIELD, FRAME_OVERHEAD, FRAME_PREFIX_LEN, FRAME_TRAILER_LEN, MAX_PAYLOAD_LEN,
};
use crate::compression::types::{CodecError, CodecId};
use crate::utils::{compute_crc32, read_u16_le, read_u32_le};

/// Borrowed view of a parsed frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameParts<'a> {
    pub codec: CodecId,
    pub declared_len: usize,
    pub body: &'a [u8],
    pub expected_crc: u32,
}

/// Reject inputs the frame cannot describe.
#[inline]
pub fn check_payload_len(len: usize) -> Result<(), CodecError> {
    if len > MAX_PAYLOAD_LEN {
        return Err(CodecError::PayloadTooLarge { len, max: MAX_PAYLOAD_LEN });
    }
    Ok(())
}

/// Wrap `body`, produced by `codec` from `original`.
pub fn seal_frame(codec: CodecId, original: &[u8], body: &[u8]) -> Result<Vec<u8>, CodecError> {
    check_payload_len(original.len())?;

    let mut out = Vec::with_capacity(FRAME_OVERHEAD + body.len());
    out.extend_from_slice(&(original.len() as u32).to_le_bytes());
    out.extend_from_slice(&(codec as u16).to_le_bytes());
    out.extend_from_slice(body);
    out.extend_from_slice(&compute_crc32(original).to_le_bytes());
    Ok(out)
}

/// Split a frame into declared length, body and expected checksum.
///
/// Checks run in wire order: size, declared length, then codec id, so a
/// garbage prefix never leads to an allocation.
pub fn open_frame(codec: CodecId, input: &[u8]) -> Result<FrameParts<'_>, CodecError> {
    if input.len() < FRAME_OVERHEAD {
        return Err(CodecError::Truncated {
            codec: codec.name(),
            len: input.len(),
            min: FRAME_OVERHEAD,
        });
    }

    let declared_len = read_u32_le(input, 0) as usize;
    check_payload_len(declared_len)?;

    let found = CodecId::verify(read_u16_le(input, FRAME_LEN_FIELD))?;
    if found != codec {
        return Err(CodecError::CodecMismatch { codec: codec.name(), found: found.name() });
    }

    let trailer_at = input.len() - FRAME_TRAILER_LEN;
    Ok(FrameParts {
        codec,
        declared_len,
        body: &input[FRAME_PREFIX_LEN..trailer_at],
        expected_crc: read_u32_le(input, trailer_at),
    })
}

/// Check restored bytes against the frame's length and checksum.
pub fn verify_restored(parts: &FrameParts<'_>, restored: &[u8]) -> Result<(), CodecError> {
    let codec = parts.codec.name();
    if restored.len() != parts.declared_len {
        return Err(CodecError::LengthMismatch {
            codec,
            declared: parts.declared_len,
            actual: restored.len(),
        });
    }

    let actual = compute_crc32(restored);
    if actual != parts.expected_crc {
        return Err(CodecError::ChecksumMismatch { codec, expected: parts.expected_crc, actual });
    }
    Ok(())
}
