//! Fast, low-ratio backend standing in for the reference library's FastLZ
//! tag, via the `snap` crate (Google Snappy).
//!
//! No example repository or `other_examples/` file in the retrieval corpus
//! links against an actual `fastlz` crate — none exists in the registry in
//! a form the rest of this codebase's dependency conventions would pull in.
//! `snap`'s raw encoder/decoder occupies the same niche (byte-oriented
//! LZ77-class compression tuned for speed over ratio) and is used exactly
//! this way in `other_examples/`'s parquet compression codec table
//! (`snap::raw::{Encoder, Decoder, max_compress_len, decompress_len}`).

use snap::raw::{max_compress_len, Decoder, Encoder};

use super::{Backend, Direction};
use crate::error::{Result, XrifError};

pub struct FastLzBackend {
    encoder: Encoder,
    decoder: Decoder,
}

impl FastLzBackend {
    pub fn new() -> Self {
        Self {
            encoder: Encoder::new(),
            decoder: Decoder::new(),
        }
    }
}

impl Default for FastLzBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for FastLzBackend {
    fn min_compressed_size(&self, raw_len: usize) -> usize {
        max_compress_len(raw_len)
    }

    fn setup(&mut self, _direction: Direction) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        self.encoder
            .compress(src, dst)
            .map_err(|_| XrifError::Liberr(-1))
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        self.decoder
            .decompress(src, dst)
            .map_err(|_| XrifError::Liberr(-1))
    }
}
