//! Top-level encode/decode orchestration: runs the three pipeline stages in
//! order over a [`Handle`]'s buffers and records per-stage timings.
//!
//! Corresponds to `xrif_encode`/`xrif_decode` in xrif.c, which call
//! `xrif_difference`/`xrif_reorder`/`xrif_compress` (or the inverse trio)
//! back to back, capturing `TIME_t` timestamps between each via the same
//! `timefn.c`-derived timer this crate keeps in [`crate::timefn`].

use crate::compress::Direction;
use crate::error::{Result, XrifError};
use crate::handle::Handle;
use crate::timefn::{span_ns, TimeT};
use crate::{difference, reorder};

/// Nanosecond timings captured across one `encode`/`decode` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timing {
    pub difference_ns: u64,
    pub reorder_ns: u64,
    pub compress_ns: u64,
}

impl Timing {
    pub fn total_ns(&self) -> u64 {
        self.difference_ns + self.reorder_ns + self.compress_ns
    }
}

/// Derived performance counters for one pipeline run (spec §4.7).
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub raw_size: usize,
    pub compressed_size: usize,
    pub timing: Timing,
}

impl Stats {
    /// `raw_size / compressed_size`, or `0.0` if nothing was compressed yet.
    pub fn compression_ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            0.0
        } else {
            self.raw_size as f64 / self.compressed_size as f64
        }
    }

    fn rate(bytes: usize, ns: u64) -> f64 {
        if ns == 0 {
            0.0
        } else {
            bytes as f64 / (ns as f64 / 1_000_000_000.0)
        }
    }

    pub fn encode_time(&self) -> u64 {
        self.timing.total_ns()
    }

    pub fn encode_rate(&self) -> f64 {
        Self::rate(self.raw_size, self.encode_time())
    }

    pub fn difference_rate(&self) -> f64 {
        Self::rate(self.raw_size, self.timing.difference_ns)
    }

    pub fn reorder_rate(&self) -> f64 {
        Self::rate(self.raw_size, self.timing.reorder_ns)
    }

    pub fn compress_rate(&self) -> f64 {
        Self::rate(self.compressed_size, self.timing.compress_ns)
    }
}

/// Runs `difference` → `reorder` → `compress` over `handle`'s raw buffer,
/// returning the number of bytes written to the compressed buffer plus
/// timing/ratio statistics. The first failing stage aborts the run.
pub fn encode(handle: &mut Handle) -> Result<Stats> {
    let type_code = handle.type_code.ok_or(XrifError::NotSetup)?;
    let (width, height, depth, frames) = (
        handle.width as usize,
        handle.height as usize,
        handle.depth,
        handle.frames,
    );

    let t_difference_start = TimeT::new();
    difference::difference(
        handle.raw_buffer.as_mut_slice(),
        handle.difference_method,
        type_code,
        width,
        height,
        depth,
        frames,
    )?;

    let t_reorder_start = TimeT::new();
    let difference_ns = span_ns(t_difference_start, t_reorder_start);

    reorder::reorder(
        handle.raw_buffer.as_slice(),
        handle.reordered_buffer.as_mut_slice(),
        handle.reorder_method,
        handle.difference_method,
        type_code,
        width,
        height,
        depth,
        frames,
    )?;

    let t_compress_start = TimeT::new();
    let reorder_ns = span_ns(t_reorder_start, t_compress_start);

    let mut backend = handle.backend();
    backend.setup(Direction::Compress)?;
    let compressed_len = backend.compress(
        handle.reordered_buffer.as_slice(),
        handle.compressed_buffer.as_mut_slice(),
    );
    backend.shutdown()?;
    let compressed_len = compressed_len?;

    let t_end = TimeT::new();
    let compress_ns = span_ns(t_compress_start, t_end);

    Ok(Stats {
        raw_size: handle.raw_buffer.len(),
        compressed_size: compressed_len,
        timing: Timing {
            difference_ns,
            reorder_ns,
            compress_ns,
        },
    })
}

/// Runs `decompress` → `unreorder` → `undifference` over `handle`'s
/// compressed buffer (`compressed_len` valid bytes), writing the
/// reconstructed image into the raw buffer.
pub fn decode(handle: &mut Handle, compressed_len: usize) -> Result<Stats> {
    let type_code = handle.type_code.ok_or(XrifError::NotSetup)?;
    let (width, height, depth, frames) = (
        handle.width as usize,
        handle.height as usize,
        handle.depth,
        handle.frames,
    );

    let t_decompress_start = TimeT::new();
    let mut backend = handle.backend();
    backend.setup(Direction::Decompress)?;
    let decompressed_len = backend.decompress(
        &handle.compressed_buffer.as_slice()[..compressed_len],
        handle.reordered_buffer.as_mut_slice(),
    );
    backend.shutdown()?;
    let _decompressed_len = decompressed_len?;

    let t_unreorder_start = TimeT::new();
    let compress_ns = span_ns(t_decompress_start, t_unreorder_start);

    reorder::unreorder(
        handle.reordered_buffer.as_slice(),
        handle.raw_buffer.as_mut_slice(),
        handle.reorder_method,
        handle.difference_method,
        type_code,
        width,
        height,
        depth,
        frames,
    )?;

    let t_undifference_start = TimeT::new();
    let reorder_ns = span_ns(t_unreorder_start, t_undifference_start);

    difference::undifference(
        handle.raw_buffer.as_mut_slice(),
        handle.difference_method,
        type_code,
        width,
        height,
        depth,
        frames,
    )?;

    let t_end = TimeT::new();
    let difference_ns = span_ns(t_undifference_start, t_end);

    Ok(Stats {
        raw_size: handle.raw_buffer.len(),
        compressed_size: compressed_len,
        timing: Timing {
            difference_ns,
            reorder_ns,
            compress_ns,
        },
    })
}
