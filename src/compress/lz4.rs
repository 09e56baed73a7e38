//! LZ4 frame-mode backend via `lzzzz::lz4f`, tuned for speed.
//!
//! Grounded on the `lzzzz::lz4f::compress_to_vec`/`decompress_to_vec` usage
//! in examples/LGFae-swww's `Compressor` (comp_decomp.rs), which wraps the
//! same one-shot frame API this backend calls.

use lzzzz::lz4f;

use super::{Backend, Direction};
use crate::error::{Result, XrifError};

pub struct Lz4Backend {
    acceleration: u32,
}

impl Lz4Backend {
    pub fn new(acceleration: u32) -> Self {
        Self { acceleration }
    }

    fn preferences(&self) -> lz4f::Preferences {
        lz4f::PreferencesBuilder::new()
            .compression_level(-(self.acceleration as i32))
            .build()
    }
}

impl Backend for Lz4Backend {
    fn min_compressed_size(&self, raw_len: usize) -> usize {
        // Frame format bound: worst case is stored-uncompressed blocks plus
        // per-block and frame header/footer overhead.
        raw_len + raw_len / 255 + 256
    }

    fn setup(&mut self, _direction: Direction) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let mut out = Vec::with_capacity(self.min_compressed_size(src.len()));
        lz4f::compress_to_vec(src, &mut out, &self.preferences())
            .map_err(|_| XrifError::Liberr(-1))?;
        if dst.len() < out.len() {
            return Err(XrifError::InsufficientSize);
        }
        dst[..out.len()].copy_from_slice(&out);
        Ok(out.len())
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        let mut out = Vec::with_capacity(dst.len());
        lz4f::decompress_to_vec(src, &mut out).map_err(|_| XrifError::Liberr(-1))?;
        if dst.len() < out.len() {
            return Err(XrifError::InsufficientSize);
        }
        dst[..out.len()].copy_from_slice(&out);
        Ok(out.len())
    }
}
