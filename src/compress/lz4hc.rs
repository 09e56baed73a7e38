//! LZ4-HC frame-mode backend via `lzzzz::lz4f`, tuned for ratio.
//!
//! `lzzzz::lz4f`'s frame API switches its internal match finder to HC-style
//! search once `compression_level` crosses into its high range, so the same
//! crate that backs [`crate::compress::lz4`] covers this tag too — just
//! with a different `compression_level`.

use lzzzz::lz4f;

use super::{Backend, Direction};
use crate::error::{Result, XrifError};

pub struct Lz4HcBackend {
    level: u32,
}

impl Lz4HcBackend {
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    fn preferences(&self) -> lz4f::Preferences {
        lz4f::PreferencesBuilder::new()
            .compression_level(self.level as i32)
            .build()
    }
}

impl Backend for Lz4HcBackend {
    fn min_compressed_size(&self, raw_len: usize) -> usize {
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
