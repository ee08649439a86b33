use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{cipher_ids, prf_ids};

/// Stable key length for both AEAD suites.
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte nonce length for AES-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Smallest valid ciphertext: nonce prefix plus tag of an empty message.
pub const MIN_CIPHERTEXT_LEN: usize = NONCE_LEN_12 + TAG_LEN;

/// Cipher suites (registry).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherSuite {
    Aes256Gcm = cipher_ids::AES256_GCM,
    Chacha20Poly1305 = cipher_ids::CHACHA20_POLY1305,
}

/// PRF used to stretch a caller secret into cipher key material.
#[repr(u16)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KdfPrf {
    #[default]
    Sha256 = prf_ids::SHA256,
    Sha512 = prf_ids::SHA512,
    Blake3K = prf_ids::BLAKE3K,
}

/// Key material handed to a cipher stage at construction.
///
/// `Secret` accepts any non-empty byte string (passwords, short shared
/// secrets) and is stretched through the selected PRF. `Raw` is used as-is
/// and must be exactly [`KEY_LEN_32`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub enum CipherKey {
    Secret { secret: Vec<u8>, prf: KdfPrf },
    Raw(Vec<u8>),
}

impl CipherKey {
    /// Secret stretched with the default PRF (HKDF-SHA256).
    pub fn secret(secret: impl AsRef<[u8]>) -> Self {
        CipherKey::Secret { secret: secret.as_ref().to_vec(), prf: KdfPrf::default() }
    }

    pub fn secret_with_prf(secret: impl AsRef<[u8]>, prf: KdfPrf) -> Self {
        CipherKey::Secret { secret: secret.as_ref().to_vec(), prf }
    }

    pub fn raw(key: impl AsRef<[u8]>) -> Self {
        CipherKey::Raw(key.as_ref().to_vec())
    }
}

// Never print key bytes.
impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Secret { secret, prf } => f
                .debug_struct("Secret")
                .field("len", &secret.len())
                .field("prf", prf)
                .finish(),
            CipherKey::Raw(key) => f.debug_struct("Raw").field("len", &key.len()).finish(),
        }
    }
}

/// Symmetric cipher primitive bound to a single key for its lifetime.
pub trait Cipher: Send + Sync {
    fn suite(&self) -> CipherSuite;
    /// Encrypt `plaintext`; output is self-contained (nonce, ciphertext, tag).
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError>;
    /// Decrypt output of [`Cipher::encrypt`]; fails closed on any tampering.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Secret key material was empty.
    #[error("key material must not be empty")]
    EmptySecret,

    /// Invalid key length provided to cipher.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// Input cannot even hold nonce and tag.
    #[error("ciphertext too short: {len} < {min}")]
    CiphertextTooShort { len: usize, min: usize },

    /// AEAD tag mismatch: tampered or truncated ciphertext, or wrong key.
    #[error("AEAD tag mismatch")]
    TagMismatch,

    /// General derivation or runtime error with context.
    #[error("crypto failure: {0}")]
    Failure(String),
}
