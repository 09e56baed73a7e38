//! Zstandard backend via the `zstd` crate's `bulk` API.
//!
//! Grounded on `other_examples/`'s parquet zstd codec for the crate choice,
//! but built on `zstd::bulk::{Compressor, Decompressor}` rather than the
//! `Encoder`/`Decoder` stream wrappers: `compress_to_buffer`/
//! `decompress_to_buffer` write straight into a caller slice, and the
//! context object they hold persists across calls instead of being rebuilt
//! every time, matching this backend's setup/shutdown discipline.

use zstd::bulk::{Compressor, Decompressor};

use super::{Backend, Direction};
use crate::error::{Result, XrifError};

pub struct ZstdBackend {
    level: i32,
    direction: Option<Direction>,
    compressor: Option<Compressor<'static>>,
    decompressor: Option<Decompressor<'static>>,
}

impl ZstdBackend {
    pub fn new(level: i32) -> Self {
        Self {
            level,
            direction: None,
            compressor: None,
            decompressor: None,
        }
    }
}

impl Backend for ZstdBackend {
    fn min_compressed_size(&self, raw_len: usize) -> usize {
        raw_len + raw_len / 100 + 512
    }

    fn setup(&mut self, direction: Direction) -> Result<()> {
        match direction {
            Direction::Compress => {
                self.compressor =
                    Some(Compressor::new(self.level).map_err(|_| XrifError::Liberr(-1))?);
            }
            Direction::Decompress => {
                self.decompressor = Some(Decompressor::new().map_err(|_| XrifError::Liberr(-1))?);
            }
        }
        self.direction = Some(direction);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.compressor = None;
        self.decompressor = None;
        self.direction = None;
        Ok(())
    }

    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        if self.direction != Some(Direction::Compress) {
            return Err(XrifError::InvalidConfig);
        }
        let compressor = self.compressor.as_mut().ok_or(XrifError::InvalidConfig)?;
        compressor
            .compress_to_buffer(src, dst)
            .map_err(|_| XrifError::InsufficientSize)
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        if self.direction != Some(Direction::Decompress) {
            return Err(XrifError::InvalidConfig);
        }
        let decompressor = self
            .decompressor
            .as_mut()
            .ok_or(XrifError::InvalidConfig)?;
        decompressor
            .decompress_to_buffer(src, dst)
            .map_err(|_| XrifError::InsufficientSize)
    }
}
