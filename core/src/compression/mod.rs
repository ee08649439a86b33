//! compression/mod.rs
//! Lossless byte codecs used by the compress/decompress stages.
//!
//! - Deterministic per-payload compression: same input, same frame.
//! - Every codec output is wrapped in a length + CRC32 frame (see `frame`).
//! - Registry resolves codec ids to implementations.

pub mod constants;
pub mod types;
pub mod frame;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
