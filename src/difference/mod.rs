//! Pixel differencing stage: dispatches a [`DifferenceMethod`] over a raw
//! buffer according to its [`TypeCode`] and plane geometry.
//!
//! Corresponds to `xrif_difference` / `xrif_undifference` in xrif.c, which
//! switch on `m_difference_method` and call into one of the per-method files
//! this module's submodules are each grounded on.

pub mod bayer;
pub mod frame;
pub mod pixel;
pub mod pixel1;
pub mod width;

use crate::error::{Result, XrifError};
use crate::methods::DifferenceMethod;
use crate::types::TypeCode;
use width::Width;

/// Applies `method` to `buf`, which holds `width*height*depth*frames`
/// elements of `type_code` in raw (plane-major, then frame-major) layout.
///
/// `previous0`'s legacy reference-frame layout is a reordering concern (spec
/// §9); at the differencing stage it behaves exactly like `previous`, since
/// only the trailing `frames-1` frames it operates on ever reach this
/// function (frame 0 is carved off by the reorderer before differencing
/// runs, and reattached unreordered afterward).
pub fn difference(
    buf: &mut [u8],
    method: DifferenceMethod,
    type_code: TypeCode,
    width: usize,
    height: usize,
    depth: u32,
    frames: u32,
) -> Result<()> {
    match method {
        DifferenceMethod::None => Ok(()),
        DifferenceMethod::Previous | DifferenceMethod::Previous0 => {
            if method == DifferenceMethod::Previous0 && !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            let w = Width::from_type(type_code)?;
            let frame_elems = width * height * depth as usize;
            frame::difference_previous(buf, w, frame_elems, frames);
            Ok(())
        }
        DifferenceMethod::First => {
            let w = Width::from_type(type_code)?;
            let frame_elems = width * height * depth as usize;
            frame::difference_first(buf, w, frame_elems, frames);
            Ok(())
        }
        DifferenceMethod::Pixel0 => {
            let w = Width::from_type(type_code)?;
            pixel::difference(buf, w, width * height, depth, frames);
            Ok(())
        }
        DifferenceMethod::Pixel1 => {
            let w = Width::from_type(type_code)?;
            pixel1::difference(buf, w, width, height, depth, frames);
            Ok(())
        }
        DifferenceMethod::Bayer => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            bayer::difference(buf, width, height, depth, frames);
            Ok(())
        }
    }
}

/// Inverse of [`difference`].
pub fn undifference(
    buf: &mut [u8],
    method: DifferenceMethod,
    type_code: TypeCode,
    width: usize,
    height: usize,
    depth: u32,
    frames: u32,
) -> Result<()> {
    match method {
        DifferenceMethod::None => Ok(()),
        DifferenceMethod::Previous | DifferenceMethod::Previous0 => {
            if method == DifferenceMethod::Previous0 && !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            let w = Width::from_type(type_code)?;
            let frame_elems = width * height * depth as usize;
            frame::undifference_previous(buf, w, frame_elems, frames);
            Ok(())
        }
        DifferenceMethod::First => {
            let w = Width::from_type(type_code)?;
            let frame_elems = width * height * depth as usize;
            frame::undifference_first(buf, w, frame_elems, frames);
            Ok(())
        }
        DifferenceMethod::Pixel0 => {
            let w = Width::from_type(type_code)?;
            pixel::undifference(buf, w, width * height, depth, frames);
            Ok(())
        }
        DifferenceMethod::Pixel1 => {
            let w = Width::from_type(type_code)?;
            pixel1::undifference(buf, w, width, height, depth, frames);
            Ok(())
        }
        DifferenceMethod::Bayer => {
            if !type_code.is_16_bit() {
                return Err(XrifError::NotImpl);
            }
            bayer::undifference(buf, width, height, depth, frames);
            Ok(())
        }
    }
}
