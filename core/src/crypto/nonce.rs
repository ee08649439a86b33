//! crypto/nonce.rs
//! Deterministic (synthetic) nonce derivation.
//!
//! Design:
//! - nonce = BLAKE3-keyed(nonce_key, suite_id || plaintext)[..12]
//! - The nonce key is separate from the cipher key (see kdf.rs).
//!
//! Security notes:
//! - A nonce only repeats when the plaintext repeats under the same key, in
//!   which case the ciphertext repeats too. Equal plaintexts are therefore
//!   linkable; distinct plaintexts never share a nonce short of a BLAKE3
//!   collision on 96 bits.

use crate::crypto::types::{CipherSuite, KEY_LEN_32, NONCE_LEN_12};

/// Derive the 12-byte nonce for `plaintext`.
#[inline]
pub fn derive_synthetic_nonce(
    nonce_key: &[u8; KEY_LEN_32],
    suite: CipherSuite,
    plaintext: &[u8],
) -> [u8; NONCE_LEN_12] {
    let mut hasher = blake3::Hasher::new_keyed(nonce_key);
    hasher.update(&(suite as u16).to_le_bytes());
    hasher.update(plaintext);
    let digest = hasher.finalize();

    let mut nonce = [0u8; NONCE_LEN_12];
    nonce.copy_from_slice(&digest.as_bytes()[..NONCE_LEN_12]);
    nonce
}
