//! Reordering stage: dispatches a [`ReorderMethod`] over the post-difference
//! buffer, handling the legacy frame-0-preserved layout shared by `first`
//! and `previous0` differencing.
//!
//! Corresponds to `xrif_reorder` / `xrif_unreorder` in xrif.c, which switch
//! on `m_reorder_method` after first carving off an unreordered reference
//! frame for the two legacy-compatible difference methods.

pub mod bitpack;
pub mod bytepack;
pub mod foldsign;
pub mod renibble;

use crate::difference::width::Width;
use crate::error::{Result, XrifError};
use crate::methods::{DifferenceMethod, ReorderMethod};
use crate::types::TypeCode;

/// Byte length of the raw/reordered split: `(one_frame_bytes, trailing_elems)`.
/// `first` and `previous0` leave frame 0 untouched at the front of both
/// buffers; every other difference method reorders the whole buffer.
fn frame_split(
    diff_method: DifferenceMethod,
    frame_elems: usize,
    frames: u32,
    elem_bytes: usize,
) -> (usize, usize) {
    match diff_method {
        DifferenceMethod::First | DifferenceMethod::Previous0 => {
            let one_frame = frame_elems * elem_bytes;
            let trailing = frame_elems * (frames as usize).saturating_sub(1);
            (one_frame, trailing)
        }
        _ => (0, frame_elems * frames as usize),
    }
}

/// Minimum reordered-buffer length (bytes) for the given configuration.
pub fn min_reordered_size(
    method: ReorderMethod,
    diff_method: DifferenceMethod,
    type_code: TypeCode,
    width: usize,
    height: usize,
    depth: u32,
    frames: u32,
) -> Result<usize> {
    let frame_elems = width * height * depth as usize;
    let elem_bytes = type_code.size();
    let (one_frame, trailing) = frame_split(diff_method, frame_elems, frames, elem_bytes);
    Ok(match method {
        ReorderMethod::None => one_frame + trailing * elem_bytes,
        ReorderMethod::Bytepack => one_frame + trailing * elem_bytes,
        ReorderMethod::BytepackRenibble => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            one_frame + renibble::reordered_len(trailing)
        }
        ReorderMethod::Bitpack => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            one_frame + bitpack::reordered_len(trailing)
        }
    })
}

/// Reorders `raw` into `reordered`, which must be at least
/// [`min_reordered_size`] bytes.
pub fn reorder(
    raw: &[u8],
    reordered: &mut [u8],
    method: ReorderMethod,
    diff_method: DifferenceMethod,
    type_code: TypeCode,
    width: usize,
    height: usize,
    depth: u32,
    frames: u32,
) -> Result<()> {
    let frame_elems = width * height * depth as usize;
    let elem_bytes = type_code.size();
    let (one_frame, trailing) = frame_split(diff_method, frame_elems, frames, elem_bytes);

    if one_frame > 0 {
        reordered[..one_frame].copy_from_slice(&raw[..one_frame]);
    }
    let raw_tail = &raw[one_frame..one_frame + trailing * elem_bytes];
    let reordered_tail = &mut reordered[one_frame..];

    match method {
        ReorderMethod::None => {
            reordered_tail[..raw_tail.len()].copy_from_slice(raw_tail);
            Ok(())
        }
        ReorderMethod::Bytepack => {
            let w = Width::from_type(type_code)?;
            if w == Width::W8 {
                return Err(XrifError::NotImpl);
            }
            bytepack::reorder(raw_tail, reordered_tail, w, trailing);
            Ok(())
        }
        ReorderMethod::BytepackRenibble => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            renibble::reorder(raw_tail, reordered_tail, trailing);
            Ok(())
        }
        ReorderMethod::Bitpack => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            bitpack::reorder(raw_tail, reordered_tail, trailing);
            Ok(())
        }
    }
}

/// Inverse of [`reorder`].
pub fn unreorder(
    reordered: &[u8],
    raw: &mut [u8],
    method: ReorderMethod,
    diff_method: DifferenceMethod,
    type_code: TypeCode,
    width: usize,
    height: usize,
    depth: u32,
    frames: u32,
) -> Result<()> {
    let frame_elems = width * height * depth as usize;
    let elem_bytes = type_code.size();
    let (one_frame, trailing) = frame_split(diff_method, frame_elems, frames, elem_bytes);

    if one_frame > 0 {
        raw[..one_frame].copy_from_slice(&reordered[..one_frame]);
    }
    let reordered_tail = &reordered[one_frame..];
    let raw_tail = &mut raw[one_frame..one_frame + trailing * elem_bytes];

    match method {
        ReorderMethod::None => {
            raw_tail.copy_from_slice(&reordered_tail[..raw_tail.len()]);
            Ok(())
        }
        ReorderMethod::Bytepack => {
            let w = Width::from_type(type_code)?;
            if w == Width::W8 {
                return Err(XrifError::NotImpl);
            }
            bytepack::unreorder(reordered_tail, raw_tail, w, trailing);
            Ok(())
        }
        ReorderMethod::BytepackRenibble => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            renibble::unreorder(reordered_tail, raw_tail, trailing);
            Ok(())
        }
        ReorderMethod::Bitpack => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            bitpack::unreorder(reordered_tail, raw_tail, trailing);
            Ok(())
        }
    }
}
