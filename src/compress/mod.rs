//! Generic compression stage: a capability interface implemented once per
//! backend, dispatched by [`CompressMethod`].
//!
//! Corresponds to `xrif_compress`/`xrif_decompress` in xrif.c, which funnel
//! every backend through the same `setup`/`compress`/`decompress`/`shutdown`
//! shape regardless of which third-party library is linked in. Backends
//! here are real, corpus-grounded crates rather than the reference's direct
//! C library bindings: `lzzzz::lz4f` for both `lz4` and `lz4hc` (frame-mode
//! encoding switches to HC-style matching internally at high compression
//! levels, so one crate covers both tags), `snap` standing in for the
//! reference's FastLZ (no FastLZ crate exists anywhere in the example
//! corpus; both occupy the same fast/low-ratio LZ77 niche), the `zstd`
//! crate, and `flate2` for zlib.

pub mod fastlz;
pub mod lz4;
pub mod lz4hc;
pub mod none;
pub mod zlib;
pub mod zstd_backend;

use crate::config;
use crate::error::Result;
use crate::methods::CompressMethod;

/// Which direction a stateful backend has been prepared for. Reusing a
/// backend in the other direction without `shutdown`+`setup` is a caller
/// error (spec §4.6's direction discipline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

/// A compression backend. Implementors may be stateless (`none`, `fastlz`,
/// `lz4`/`lz4hc` via the one-shot frame API) or hold a live context across
/// calls (`zstd`, `zlib`); `setup`/`shutdown` bracket that lifetime.
pub trait Backend {
    /// Upper bound on compressed output size for `raw_len` input bytes.
    fn min_compressed_size(&self, raw_len: usize) -> usize;

    /// Prepares the backend for use in `direction`. A no-op for stateless
    /// backends.
    fn setup(&mut self, direction: Direction) -> Result<()>;

    /// Releases any backend-held resources. A no-op for stateless backends.
    fn shutdown(&mut self) -> Result<()>;

    /// Compresses `src` into `dst`, returning the number of bytes written.
    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize>;

    /// Decompresses `src` into `dst`, returning the number of bytes written.
    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize>;
}

/// Constructs the backend for `method`, configured with the library's
/// compile-time defaults (spec §4.11).
pub fn backend_for(method: CompressMethod) -> Box<dyn Backend> {
    backend_for_handle(method, config::LZ4_ACCEL_DEFAULT as u32, None)
}

/// Constructs the backend for `method`, honoring a handle's own LZ4
/// acceleration factor and an optional backend-specific level override
/// (meaning depends on `method`: LZ4HC level, zstd level, or zlib level).
/// Falls back to the library's compile-time default for whichever of the
/// two a given backend doesn't use.
pub fn backend_for_handle(
    method: CompressMethod,
    lz4_acceleration: u32,
    level: Option<i32>,
) -> Box<dyn Backend> {
    match method {
        CompressMethod::None => Box::new(none::NoneBackend),
        CompressMethod::Lz4 => Box::new(lz4::Lz4Backend::new(lz4_acceleration)),
        CompressMethod::Lz4Hc => Box::new(lz4hc::Lz4HcBackend::new(
            level.unwrap_or(config::LZ4HC_LEVEL_DEFAULT) as u32,
        )),
        CompressMethod::FastLz => Box::new(fastlz::FastLzBackend::new()),
        CompressMethod::Zstd => {
            Box::new(zstd_backend::ZstdBackend::new(level.unwrap_or(config::ZSTD_LEVEL_DEFAULT)))
        }
        CompressMethod::Zlib => Box::new(zlib::ZlibBackend::new(
            level.unwrap_or(config::ZLIB_LEVEL_DEFAULT) as u32,
        )),
    }
}
