//! crypto/aead.rs
//! AEAD cipher primitive for AES-256-GCM and ChaCha20-Poly1305.
//!
//! Design notes:
//! - Both ciphers use 32-byte keys and 12-byte nonces.
//! - Output layout: nonce(12) || ciphertext || tag(16).
//! - Tag verification is constant-time and fails closed (no partial plaintext).
//! - Empty plaintext is valid and seals to nonce + tag only.

use std::fmt;

// Import AEAD traits from aes_gcm's re-export to avoid duplicate `aead` paths.
use aes_gcm::aead::{Aead, KeyInit, Payload};

// Concrete AEAD types
use aes_gcm::{Aes256Gcm, Nonce as AesNonce};                // 32-byte key, 12-byte nonce
use chacha20poly1305::{ChaCha20Poly1305, Nonce as ChaNonce}; // 32-byte key, 12-byte nonce

use crate::crypto::kdf::derive_keys;
use crate::crypto::nonce::derive_synthetic_nonce;
use crate::crypto::types::{
    Cipher, CipherKey, CipherSuite, CryptoError, KEY_LEN_32, MIN_CIPHERTEXT_LEN, NONCE_LEN_12,
};

/// Associated data bound into every tag.
const AAD_PREFIX: &[u8] = b"LPC1";

/// Unified AEAD implementation selected by suite.
#[derive(Clone)]
pub enum AeadImpl {
    AesGcm(Aes256Gcm),
    ChaCha(ChaCha20Poly1305),
}

impl AeadImpl {
    pub fn new(suite: CipherSuite, key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: key.len(),
            });
        }

        match suite {
            CipherSuite::Aes256Gcm => {
                let cipher = Aes256Gcm::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen {
                        expected: KEY_LEN_32,
                        actual: key.len(),
                    })?;
                Ok(Self::AesGcm(cipher))
            }
            CipherSuite::Chacha20Poly1305 => {
                let cipher = ChaCha20Poly1305::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen {
                        expected: KEY_LEN_32,
                        actual: key.len(),
                    })?;
                Ok(Self::ChaCha(cipher))
            }
        }
    }

    /// AEAD seal (encrypt) plaintext with nonce and AAD.
    pub fn seal(
        &self,
        nonce_12: &[u8; NONCE_LEN_12],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let payload = Payload { msg: plaintext, aad };
        match self {
            AeadImpl::AesGcm(cipher) => cipher
                .encrypt(AesNonce::from_slice(nonce_12), payload)
                .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into())),
            AeadImpl::ChaCha(cipher) => cipher
                .encrypt(ChaNonce::from_slice(nonce_12), payload)
                .map_err(|_| CryptoError::Failure("ChaCha20-Poly1305 seal failed".into())),
        }
    }

    /// AEAD open (decrypt) ciphertext with nonce and AAD.
    pub fn open(
        &self,
        nonce_12: &[u8; NONCE_LEN_12],
        aad: &[u8],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let payload = Payload { msg: ciphertext_and_tag, aad };
        match self {
            AeadImpl::AesGcm(cipher) => cipher
                .decrypt(AesNonce::from_slice(nonce_12), payload)
                .map_err(|_| CryptoError::TagMismatch),
            AeadImpl::ChaCha(cipher) => cipher
                .decrypt(ChaNonce::from_slice(nonce_12), payload)
                .map_err(|_| CryptoError::TagMismatch),
        }
    }
}

/// Key-bound [`Cipher`] over an AEAD suite with synthetic nonces.
#[derive(Clone)]
pub struct AeadCipher {
    suite: CipherSuite,
    aead: AeadImpl,
    nonce_key: [u8; KEY_LEN_32],
    aad: [u8; 6],
}

impl AeadCipher {
    pub fn new(suite: CipherSuite, key: &CipherKey) -> Result<Self, CryptoError> {
        let keys = derive_keys(key, suite)?;
        let aead = AeadImpl::new(suite, &keys.cipher_key)?;

        let mut aad = [0u8; 6];
        aad[..4].copy_from_slice(AAD_PREFIX);
        aad[4..].copy_from_slice(&(suite as u16).to_le_bytes());

        Ok(Self { suite, aead, nonce_key: keys.nonce_key, aad })
    }
}

impl fmt::Debug for AeadCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeadCipher").field("suite", &self.suite).finish_non_exhaustive()
    }
}

impl Cipher for AeadCipher {
    fn suite(&self) -> CipherSuite {
        self.suite
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = derive_synthetic_nonce(&self.nonce_key, self.suite, plaintext);
        let sealed = self.aead.seal(&nonce, &self.aad, plaintext)?;

        let mut out = Vec::with_capacity(NONCE_LEN_12 + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < MIN_CIPHERTEXT_LEN {
            return Err(CryptoError::CiphertextTooShort {
                len: ciphertext.len(),
                min: MIN_CIPHERTEXT_LEN,
            });
        }

        let (nonce_bytes, body) = ciphertext.split_at(NONCE_LEN_12);
        let mut nonce = [0u8; NONCE_LEN_12];
        nonce.copy_from_slice(nonce_bytes);

        let plaintext = self.aead.open(&nonce, &self.aad, body)?;

        // A valid tag over a nonce that does not match the plaintext means the
        // ciphertext was produced by something other than this cipher.
        if derive_synthetic_nonce(&self.nonce_key, self.suite, &plaintext) != nonce {
            return Err(CryptoError::TagMismatch);
        }
        Ok(plaintext)
    }
}
