//! Codec handle: geometry, method selection, and the raw/reordered/
//! compressed buffer triple that a single encode or decode operates on.
//!
//! Corresponds to `xrif_t` (`struct xrif_handle`) and its
//! `xrif_new`/`xrif_set_size`/`xrif_configure`/`xrif_allocate_*`/
//! `xrif_reset`/`xrif_delete` lifecycle in xrif.c/xrif.h. The handle is
//! single-threaded per spec §5: one operation at a time per instance.

use crate::buffer::Buffer;
use crate::config;
use crate::error::{Result, XrifError};
use crate::methods::{CompressMethod, DifferenceMethod, ReorderMethod};
use crate::reorder;
use crate::types::TypeCode;

/// Geometry, method selection, and buffers for one encode/decode pipeline.
pub struct Handle {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub frames: u32,
    pub type_code: Option<TypeCode>,
    pub difference_method: DifferenceMethod,
    pub reorder_method: ReorderMethod,
    pub compress_method: CompressMethod,
    pub lz4_acceleration: u16,
    /// Backend-specific level override (LZ4HC, zstd, or zlib level depending
    /// on `compress_method`); `None` uses the backend's compile-time default.
    pub compress_level: Option<i32>,
    pub compress_on_raw: bool,

    pub raw_buffer: Buffer,
    pub reordered_buffer: Buffer,
    pub compressed_buffer: Buffer,
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl Handle {
    /// Equivalent to `xrif_new`: a handle with no geometry or buffers set.
    pub fn new() -> Self {
        Handle {
            width: 0,
            height: 0,
            depth: 1,
            frames: 1,
            type_code: None,
            difference_method: DifferenceMethod::Previous,
            reorder_method: ReorderMethod::Bytepack,
            compress_method: CompressMethod::Lz4,
            lz4_acceleration: config::LZ4_ACCEL_DEFAULT as u16,
            compress_level: None,
            compress_on_raw: config::COMPRESS_ON_RAW_DEFAULT,
            raw_buffer: Buffer::Empty,
            reordered_buffer: Buffer::Empty,
            compressed_buffer: Buffer::Empty,
        }
    }

    /// Equivalent to `xrif_set_size`: sets plane/frame geometry and pixel type.
    pub fn set_size(
        &mut self,
        width: u32,
        height: u32,
        depth: u32,
        frames: u32,
        type_code: TypeCode,
    ) -> Result<()> {
        if width == 0 || height == 0 || depth == 0 || frames == 0 {
            return Err(XrifError::InvalidSize);
        }
        self.width = width;
        self.height = height;
        self.depth = depth;
        self.frames = frames;
        self.type_code = Some(type_code);
        Ok(())
    }

    /// Equivalent to `xrif_configure`: selects the three pipeline methods.
    pub fn configure(
        &mut self,
        difference_method: DifferenceMethod,
        reorder_method: ReorderMethod,
        compress_method: CompressMethod,
    ) -> Result<()> {
        self.difference_method = difference_method;
        self.reorder_method = reorder_method;
        self.compress_method = compress_method;
        Ok(())
    }

    fn type_code(&self) -> Result<TypeCode> {
        self.type_code.ok_or(XrifError::NotSetup)
    }

    /// Number of elements across all frames/depth/pixels.
    pub fn raw_elems(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize * self.frames as usize
    }

    fn raw_size(&self) -> Result<usize> {
        Ok(self.raw_elems() * self.type_code()?.size())
    }

    fn reordered_size(&self) -> Result<usize> {
        reorder::min_reordered_size(
            self.reorder_method,
            self.difference_method,
            self.type_code()?,
            self.width as usize,
            self.height as usize,
            self.depth,
            self.frames,
        )
    }

    fn compressed_size(&self) -> Result<usize> {
        let reordered_len = self.reordered_size()?;
        Ok(self.backend().min_compressed_size(reordered_len))
    }

    /// Constructs this handle's compressor backend, honoring its own
    /// acceleration/level overrides.
    pub fn backend(&self) -> Box<dyn crate::compress::Backend> {
        crate::compress::backend_for_handle(
            self.compress_method,
            self.lz4_acceleration as u32,
            self.compress_level,
        )
    }

    /// Equivalent to `xrif_allocate_raw`.
    pub fn allocate_raw(&mut self) -> Result<()> {
        self.raw_buffer = Buffer::allocate(self.raw_size()?);
        Ok(())
    }

    /// Equivalent to `xrif_allocate_reordered`.
    pub fn allocate_reordered(&mut self) -> Result<()> {
        self.reordered_buffer = Buffer::allocate(self.reordered_size()?);
        Ok(())
    }

    /// Equivalent to `xrif_allocate_compressed`.
    pub fn allocate_compressed(&mut self) -> Result<()> {
        self.compressed_buffer = Buffer::allocate(self.compressed_size()?);
        Ok(())
    }

    /// Equivalent to `xrif_allocate`: allocates all three buffers.
    pub fn allocate(&mut self) -> Result<()> {
        self.allocate_raw()?;
        self.allocate_reordered()?;
        self.allocate_compressed()?;
        Ok(())
    }

    /// Equivalent to `xrif_set_raw`: hands the handle caller-owned memory for
    /// the raw buffer instead of allocating it. Fails `INVALID_SIZE` if
    /// `(ptr, len)` is an inconsistent pair and `INSUFFICIENT_SIZE` if `len`
    /// is below the geometry's raw size. Replaces (and, if owned, frees) the
    /// previous raw buffer.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of `len` bytes for as long as
    /// this handle holds the buffer, i.e. until the next `set_raw`,
    /// `allocate_raw`, `reset`, or `destroy` call.
    pub unsafe fn set_raw(&mut self, ptr: *mut u8, len: usize) -> Result<()> {
        let buffer = Buffer::borrow(ptr, len)?;
        if len < self.raw_size()? {
            return Err(XrifError::InsufficientSize);
        }
        self.raw_buffer = buffer;
        Ok(())
    }

    /// Equivalent to `xrif_set_reordered`: see [`Self::set_raw`].
    ///
    /// # Safety
    /// Same contract as [`Self::set_raw`], for the reordered buffer.
    pub unsafe fn set_reordered(&mut self, ptr: *mut u8, len: usize) -> Result<()> {
        let buffer = Buffer::borrow(ptr, len)?;
        if len < self.reordered_size()? {
            return Err(XrifError::InsufficientSize);
        }
        self.reordered_buffer = buffer;
        Ok(())
    }

    /// Equivalent to `xrif_set_compressed`: see [`Self::set_raw`].
    ///
    /// # Safety
    /// Same contract as [`Self::set_raw`], for the compressed buffer.
    pub unsafe fn set_compressed(&mut self, ptr: *mut u8, len: usize) -> Result<()> {
        let buffer = Buffer::borrow(ptr, len)?;
        if len < self.compressed_size()? {
            return Err(XrifError::InsufficientSize);
        }
        self.compressed_buffer = buffer;
        Ok(())
    }

    /// Equivalent to `xrif_reset`: drops buffers, keeps geometry/methods.
    pub fn reset(&mut self) {
        self.raw_buffer = Buffer::Empty;
        self.reordered_buffer = Buffer::Empty;
        self.compressed_buffer = Buffer::Empty;
    }

    /// Equivalent to `xrif_delete`. `Drop` already releases owned buffers;
    /// this additionally clears geometry, matching the reference library's
    /// full handle teardown.
    pub fn destroy(&mut self) {
        self.reset();
        self.width = 0;
        self.height = 0;
        self.depth = 1;
        self.frames = 1;
        self.type_code = None;
    }
}
