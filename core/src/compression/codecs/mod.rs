//! compression/codecs/mod.rs
//! Concrete codecs. All share the frame layout in `compression::frame`.

pub mod deflate;
pub mod lz4;
pub mod store;
pub mod zstd;

pub use self::deflate::*;
pub use self::lz4::*;
pub use self::store::*;
pub use self::zstd::*;
