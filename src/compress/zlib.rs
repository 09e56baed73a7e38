//! zlib (deflate) backend via the `flate2` crate.
//!
//! Grounded on `other_examples/`'s parquet gzip codec for the crate choice,
//! but built on `flate2::{Compress, Decompress}` rather than the
//! `read`/`write` stream wrappers: those raw structs hold a persistent
//! zlib context with a one-shot `compress`/`decompress` call straight into
//! a caller slice, matching this backend's setup/shutdown discipline
//! instead of rebuilding a context every call.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use super::{Backend, Direction};
use crate::error::{Result, XrifError};

pub struct ZlibBackend {
    level: u32,
    direction: Option<Direction>,
    compressor: Option<Compress>,
    decompressor: Option<Decompress>,
}

impl ZlibBackend {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            direction: None,
            compressor: None,
            decompressor: None,
        }
    }
}

impl Backend for ZlibBackend {
    fn min_compressed_size(&self, raw_len: usize) -> usize {
        raw_len + raw_len / 1000 + 128
    }

    fn setup(&mut self, direction: Direction) -> Result<()> {
        match direction {
            Direction::Compress => {
                self.compressor = Some(Compress::new(Compression::new(self.level), true));
            }
            Direction::Decompress => {
                self.decompressor = Some(Decompress::new(true));
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
        compressor.reset();
        let status = compressor
            .compress(src, dst, FlushCompress::Finish)
            .map_err(|_| XrifError::Liberr(-1))?;
        if status != Status::StreamEnd {
            return Err(XrifError::InsufficientSize);
        }
        Ok(compressor.total_out() as usize)
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<usize> {
        if self.direction != Some(Direction::Decompress) {
            return Err(XrifError::InvalidConfig);
        }
        let decompressor = self
            .decompressor
            .as_mut()
            .ok_or(XrifError::InvalidConfig)?;
        decompressor.reset(true);
        let status = decompressor
            .decompress(src, dst, FlushDecompress::Finish)
            .map_err(|_| XrifError::Liberr(-1))?;
        if status != Status::StreamEnd {
            return Err(XrifError::InsufficientSize);
        }
        Ok(decompressor.total_out() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_setup_compress_decompress() {
        let src = b"zlib backend round trip payload, repeated repeated repeated".repeat(4);

        let mut enc = ZlibBackend::new(6);
        enc.setup(Direction::Compress).unwrap();
        let mut compressed = vec![0u8; enc.min_compressed_size(src.len())];
        let n = enc.compress(&src, &mut compressed).unwrap();
        enc.shutdown().unwrap();

        let mut dec = ZlibBackend::new(6);
        dec.setup(Direction::Decompress).unwrap();
        let mut out = vec![0u8; src.len()];
        let m = dec.decompress(&compressed[..n], &mut out).unwrap();
        dec.shutdown().unwrap();

        assert_eq!(&out[..m], src.as_slice());
    }

    #[test]
    fn reused_compressor_resets_between_calls() {
        let mut backend = ZlibBackend::new(6);
        backend.setup(Direction::Compress).unwrap();
        let a = b"first payload".to_vec();
        let b = b"second, different payload".to_vec();
        let mut out_a = vec![0u8; backend.min_compressed_size(a.len())];
        let mut out_b = vec![0u8; backend.min_compressed_size(b.len())];
        let na = backend.compress(&a, &mut out_a).unwrap();
        let nb = backend.compress(&b, &mut out_b).unwrap();
        backend.shutdown().unwrap();

        let mut dec = ZlibBackend::new(6);
        dec.setup(Direction::Decompress).unwrap();
        let mut round_a = vec![0u8; a.len()];
        let ra = dec.decompress(&out_a[..na], &mut round_a).unwrap();
        assert_eq!(&round_a[..ra], a.as_slice());
        let mut round_b = vec![0u8; b.len()];
        let rb = dec.decompress(&out_b[..nb], &mut round_b).unwrap();
        assert_eq!(&round_b[..rb], b.as_slice());
    }

    #[test]
    fn wrong_direction_fails_invalid_config() {
        let mut backend = ZlibBackend::new(6);
        backend.setup(Direction::Decompress).unwrap();
        let mut out = vec![0u8; 64];
        assert_eq!(
            backend.compress(b"payload", &mut out),
            Err(XrifError::InvalidConfig)
        );
    }

    #[test]
    fn unset_up_backend_fails_invalid_config() {
        let mut backend = ZlibBackend::new(6);
        let mut out = vec![0u8; 64];
        assert_eq!(
            backend.decompress(b"payload", &mut out),
            Err(XrifError::InvalidConfig)
        );
    }
}
