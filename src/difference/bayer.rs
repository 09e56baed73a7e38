//! Bayer-pattern pixel differencing: each pixel against the same-channel
//! pixel two columns to its left, leaving the first two columns of every
//! row as raw anchors.
//!
//! Corresponds to `xrif_difference_bayer_sint16` in xrif_difference_bayer.c,
//! the only width the reference library ever completed (sint8/32/64 variants
//! are present only as `#if 0`-disabled stubs there). This port keeps that
//! restriction rather than generalizing over width.
//!
//! The reference source never implements `xrif_undifference_bayer` at all —
//! its undifference half of the file is an unrelated, disabled copy of the
//! `pixel0` undifferencer. The inverse below is derived directly from the
//! forward algorithm: ascending restoration is the mirror of the descending
//! (right-to-left) forward pass.

use super::width::{add_into, sub_into, Width};

const W: Width = Width::W16;

/// One `width*height` plane. Per row, right-to-left: `row[c] -= row[c-2]`
/// for `c` from `width-1` down to `2`. Columns 0 and 1 are untouched anchors.
pub fn difference_plane(buf: &mut [u8], width: usize, height: usize) {
    for rr in 0..height {
        let row_start = rr * width;
        if width < 3 {
            continue;
        }
        for c in (2..width).rev() {
            sub_into(buf, row_start + c, row_start + c - 2, W);
        }
    }
}

/// Inverse of [`difference_plane`]: ascending `row[c] += row[c-2]`.
pub fn undifference_plane(buf: &mut [u8], width: usize, height: usize) {
    for rr in 0..height {
        let row_start = rr * width;
        if width < 3 {
            continue;
        }
        for c in 2..width {
            add_into(buf, row_start + c, row_start + c - 2, W);
        }
    }
}

/// Applies [`difference_plane`] to every `(frame, depth)` plane.
pub fn difference(buf: &mut [u8], width: usize, height: usize, depth: u32, frames: u32) {
    let npix = width * height;
    let planes = depth as usize * frames as usize;
    for p in 0..planes {
        let start = p * npix * W.bytes();
        let end = start + npix * W.bytes();
        difference_plane(&mut buf[start..end], width, height);
    }
}

/// Inverse of [`difference`].
pub fn undifference(buf: &mut [u8], width: usize, height: usize, depth: u32, frames: u32) {
    let npix = width * height;
    let planes = depth as usize * frames as usize;
    for p in 0..planes {
        let start = p * npix * W.bytes();
        let end = start + npix * W.bytes();
        undifference_plane(&mut buf[start..end], width, height);
    }
}
