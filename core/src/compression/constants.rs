/// Stable codec IDs (u16).
pub mod codec_ids {
    pub const STORE: u16 = 0x0000;
    pub const ZSTD: u16 = 0x0001;
    pub const LZ4: u16 = 0x0002;
    pub const DEFLATE: u16 = 0x0003;
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_ZSTD: i32 = 6;
pub const DEFAULT_LEVEL_LZ4: i32 = 0; // block API has no levels
pub const DEFAULT_LEVEL_DEFLATE: i32 = 6;

/// Largest payload a codec frame may declare (64 MiB).
pub const MAX_PAYLOAD_LEN: usize = 64 * 1024 * 1024;

/// Frame prefix: u32 original length, then u16 codec id.
pub const FRAME_LEN_FIELD: usize = 4;
pub const FRAME_PREFIX_LEN: usize = FRAME_LEN_FIELD + 2;
/// Frame trailer: u32 CRC32 of the original bytes.
pub const FRAME_TRAILER_LEN: usize = 4;
pub const FRAME_OVERHEAD: usize = FRAME_PREFIX_LEN + FRAME_TRAILER_LEN;
