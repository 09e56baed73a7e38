//! Tagged-variant method selectors for the three pipeline stages.
//!
//! Corresponds to `XRIF_DIFFERENCE_*`, `XRIF_REORDER_*`, and `XRIF_COMPRESS_*`
//! in xrif.h. Raw values are preserved from the authoritative header so stream
//! files remain byte-compatible; `-1` ("none") and `0` ("default", normalized
//! to the modern per-family default) are both accepted on read.

use crate::error::{Result, XrifError};

/// Pixel differencing method (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceMethod {
    None,
    Previous,
    First,
    Pixel0,
    Pixel1,
    Bayer,
    /// Legacy layout: frame 0 is preserved unreordered at the front of the
    /// reordered buffer; only `F-1` frames are differenced/reordered. Accepted
    /// only for 16-bit types (spec §9 open-question decision).
    Previous0,
}

impl DifferenceMethod {
    pub fn raw(self) -> i16 {
        match self {
            DifferenceMethod::None => -1,
            DifferenceMethod::Previous => 100,
            DifferenceMethod::First => 200,
            DifferenceMethod::Pixel0 => 300,
            DifferenceMethod::Pixel1 => 400,
            DifferenceMethod::Bayer => 500,
            DifferenceMethod::Previous0 => 600,
        }
    }

    pub fn from_raw(raw: i16) -> Result<Self> {
        Ok(match raw {
            -1 => DifferenceMethod::None,
            0 | 100 => DifferenceMethod::Previous,
            200 => DifferenceMethod::First,
            300 => DifferenceMethod::Pixel0,
            400 => DifferenceMethod::Pixel1,
            500 => DifferenceMethod::Bayer,
            600 => DifferenceMethod::Previous0,
            _ => return Err(XrifError::InvalidConfig),
        })
    }

    /// Whether this method preserves frame 0 unreordered at the front of the
    /// reordered buffer (spec §9, legacy layout).
    pub fn is_legacy_reference_frame(self) -> bool {
        matches!(self, DifferenceMethod::Previous0)
    }
}

/// Byte/bit reordering method (spec §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderMethod {
    None,
    Bytepack,
    BytepackRenibble,
    Bitpack,
}

impl ReorderMethod {
    pub fn raw(self) -> i16 {
        match self {
            ReorderMethod::None => -1,
            ReorderMethod::Bytepack => 100,
            ReorderMethod::BytepackRenibble => 200,
            ReorderMethod::Bitpack => 300,
        }
    }

    pub fn from_raw(raw: i16) -> Result<Self> {
        Ok(match raw {
            -1 => ReorderMethod::None,
            0 | 100 => ReorderMethod::Bytepack,
            200 => ReorderMethod::BytepackRenibble,
            300 => ReorderMethod::Bitpack,
            _ => return Err(XrifError::InvalidConfig),
        })
    }
}

/// Generic compression backend tag (spec §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressMethod {
    None,
    Lz4,
    Lz4Hc,
    FastLz,
    Zstd,
    Zlib,
}

impl CompressMethod {
    pub fn raw(self) -> i16 {
        match self {
            CompressMethod::None => -1,
            CompressMethod::Lz4 => 100,
            CompressMethod::Lz4Hc => 200,
            CompressMethod::FastLz => 300,
            CompressMethod::Zstd => 400,
            CompressMethod::Zlib => 500,
        }
    }

    pub fn from_raw(raw: i16) -> Result<Self> {
        Ok(match raw {
            -1 => CompressMethod::None,
            0 | 100 => CompressMethod::Lz4,
            200 => CompressMethod::Lz4Hc,
            300 => CompressMethod::FastLz,
            400 => CompressMethod::Zstd,
            500 => CompressMethod::Zlib,
            _ => return Err(XrifError::InvalidConfig),
        })
    }
}
