//! Two-pass pixel differencing (`pixel1`): row-wise, then column-0 anchors.
//!
//! Corresponds to `xrif_difference_pixel1_sint{8,16,32,64}` /
//! `xrif_undifference_pixel1_sint{8,16,32,64}` in xrif_difference_pixel1.c,
//! generalized over element width.

use super::width::{add_into, sub_into, Width};

/// One `width*height` plane: horizontal row differencing (right-to-left,
/// independent per row) followed by a sequential column-0 pass (bottom-to-top)
/// over the rows left untouched by the first pass.
pub fn difference_plane(buf: &mut [u8], w: Width, width: usize, height: usize) {
    for cc in 0..height {
        let row_start = cc * width;
        for nn in 0..width.saturating_sub(1) {
            let dst = row_start + width - nn - 1;
            let src = row_start + width - nn - 2;
            sub_into(buf, dst, src, w);
        }
    }
    for nn in 0..height.saturating_sub(1) {
        let idx0 = (height - nn - 1) * width;
        let idx1 = (height - nn - 2) * width;
        sub_into(buf, idx0, idx1, w);
    }
}

/// Inverse of [`difference_plane`]: column-0 anchors reconstructed first
/// (top-to-bottom), then each row's cumulative sum (left-to-right).
pub fn undifference_plane(buf: &mut [u8], w: Width, width: usize, height: usize) {
    for nn in 1..height {
        let idx0 = (nn - 1) * width;
        let idx1 = nn * width;
        add_into(buf, idx1, idx0, w);
    }
    for cc in 0..height {
        let row_start = cc * width;
        for nn in 1..width {
            add_into(buf, row_start + nn, row_start + nn - 1, w);
        }
    }
}

/// Applies [`difference_plane`] to every `(frame, depth)` plane.
pub fn difference(buf: &mut [u8], w: Width, width: usize, height: usize, depth: u32, frames: u32) {
    let npix = width * height;
    let planes = depth as usize * frames as usize;
    for p in 0..planes {
        let start = p * npix * w.bytes();
        let end = start + npix * w.bytes();
        difference_plane(&mut buf[start..end], w, width, height);
    }
}

/// Inverse of [`difference`].
pub fn undifference(
    buf: &mut [u8],
    w: Width,
    width: usize,
    height: usize,
    depth: u32,
    frames: u32,
) {
    let npix = width * height;
    let planes = depth as usize * frames as usize;
    for p in 0..planes {
        let start = p * npix * w.bytes();
        let end = start + npix * w.bytes();
        undifference_plane(&mut buf[start..end], w, width, height);
    }
}
