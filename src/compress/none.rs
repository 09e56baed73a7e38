//! Identity backend: copies bytes through unchanged.
//!
//! Corresponds to the `XRIF_COMPRESS_NONE` path in xrif.c's compress
//! dispatcher, which skips straight to a `memcpy`.

use super::{Backend, Direction};
use crate::error::{Result, XrifError};

pub struct NoneBackend;

impl Backend for NoneBackend {
    fn min_compressed_size(&self, raw_len: usize) -> usize {
        raw_len
    }

    fn setup(&mut self, _direction: Direction) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        if dst.len() < src.len() {
            return Err(XrifError::InsufficientSize);
        }
        dst[..src.len()].copy_from_slice(src);
        Ok(src.len())
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        self.compress(src, dst)
    }
}
