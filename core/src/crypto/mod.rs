//! Symmetric cipher primitive used by the encrypt/decrypt stages.

pub mod types;
pub mod aead;
pub mod kdf;
pub mod nonce;

pub use types::*;
pub use aead::*;
pub use kdf::*;
pub use nonce::*;
