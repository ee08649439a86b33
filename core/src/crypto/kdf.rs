//! crypto/kdf.rs
//! Turns caller key material into the two 32-byte keys a cipher stage needs.
//!
//! Design:
//! - Secret keys: HKDF-Extract(secret) -> PRK, then HKDF-Expand(PRK, info) once
//!   per purpose (cipher key, nonce key). Keyed BLAKE3 is available as an
//!   alternative PRF.
//! - Raw keys: used directly as the cipher key; the nonce key is a keyed
//!   BLAKE3 of a fixed label, so it never equals the cipher key.
//! - `info` binds the purpose label and the cipher suite id, so one secret
//!   yields unrelated keys for AES-GCM and ChaCha20-Poly1305.

use hkdf::Hkdf;
use sha2::{Sha256, Sha512};

use crate::constants::labels;
use crate::crypto::types::{CipherKey, CipherSuite, CryptoError, KdfPrf, KEY_LEN_32};

/// Cipher and nonce sub-keys derived from one [`CipherKey`].
#[derive(Clone)]
pub struct DerivedKeys {
    pub cipher_key: [u8; KEY_LEN_32],
    pub nonce_key: [u8; KEY_LEN_32],
}

#[inline]
fn build_info(label: &[u8], suite: CipherSuite) -> Vec<u8> {
    let mut info = Vec::with_capacity(label.len() + 2);
    info.extend_from_slice(label);
    info.extend_from_slice(&(suite as u16).to_le_bytes());
    info
}

/// Derive cipher and nonce keys for `suite` from caller key material.
///
/// Errors:
/// - `CryptoError::EmptySecret` for an empty secret.
/// - `CryptoError::InvalidKeyLen` for a raw key that is not 32 bytes.
pub fn derive_keys(key: &CipherKey, suite: CipherSuite) -> Result<DerivedKeys, CryptoError> {
    match key {
        CipherKey::Raw(raw) => {
            if raw.len() != KEY_LEN_32 {
                return Err(CryptoError::InvalidKeyLen {
                    expected: KEY_LEN_32,
                    actual: raw.len(),
                });
            }
            let mut cipher_key = [0u8; KEY_LEN_32];
            cipher_key.copy_from_slice(raw);
            let info = build_info(labels::NONCE_KEY, suite);
            let nonce_key = *blake3::keyed_hash(&cipher_key, &info).as_bytes();
            Ok(DerivedKeys { cipher_key, nonce_key })
        }
        CipherKey::Secret { secret, prf } => {
            if secret.is_empty() {
                return Err(CryptoError::EmptySecret);
            }
            Ok(DerivedKeys {
                cipher_key: expand(secret, *prf, &build_info(labels::CIPHER_KEY, suite))?,
                nonce_key: expand(secret, *prf, &build_info(labels::NONCE_KEY, suite))?,
            })
        }
    }
}

fn expand(secret: &[u8], prf: KdfPrf, info: &[u8]) -> Result<[u8; KEY_LEN_32], CryptoError> {
    let mut key = [0u8; KEY_LEN_32];
    match prf {
        KdfPrf::Sha256 => {
            Hkdf::<Sha256>::new(None, secret)
                .expand(info, &mut key)
                .map_err(|_| CryptoError::Failure("HKDF expand failed (SHA-256)".into()))?;
        }
        KdfPrf::Sha512 => {
            Hkdf::<Sha512>::new(None, secret)
                .expand(info, &mut key)
                .map_err(|_| CryptoError::Failure("HKDF expand failed (SHA-512)".into()))?;
        }
        KdfPrf::Blake3K => {
            let prk = blake3::derive_key(labels::BLAKE3_EXTRACT, secret);
            let mut expand = blake3::Hasher::new_keyed(&prk);
            expand.update(labels::BLAKE3_EXPAND.as_bytes());
            expand.update(info);
            key.copy_from_slice(expand.finalize().as_bytes());
        }
    }
    Ok(key)
}
