/// Cipher suite identifiers.
pub mod cipher_ids {
    pub const AES256_GCM: u16        = 0x0001;
    pub const CHACHA20_POLY1305: u16 = 0x0002;
}

/// Key-derivation PRF identifiers.
pub mod prf_ids {
    pub const SHA256: u16  = 0x0001;
    pub const SHA512: u16  = 0x0002;
    pub const BLAKE3K: u16 = 0x0003; // keyed BLAKE3
}

/// Domain separation labels for key derivation.
pub mod labels {
    pub const CIPHER_KEY: &[u8] = b"LPC1|cipher-key";
    pub const NONCE_KEY: &[u8]  = b"LPC1|nonce-key";
    pub const BLAKE3_EXTRACT: &str = "LPC1 2024 kdf extract";
    pub const BLAKE3_EXPAND: &str  = "LPC1 2024 kdf expand";
}
