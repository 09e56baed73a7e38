//! Classical in-plane pixel differencing (`pixel0`).
//!
//! Corresponds to `xrif_difference_pixel_sint{16,32,64}` / `xrif_undifference_pixel_sint{16,32,64}`
//! in xrif_difference_pixel.c, generalized over element width (§ difference::width).
//!
//! The reference implementation gates its inner loop with `#pragma omp for`,
//! but iterates `nn` ascending while writing `rboff[npix-nn-1] -= rboff[npix-nn-2]`
//! — each iteration's source index is the next iteration's destination index,
//! a genuine read-after-write hazard across loop iterations if actually run
//! with more than one thread. This port keeps the sequential prefix-diff
//! within a plane (correct by construction) and instead parallelizes across
//! independent `(frame, depth)` planes, which share no state.

use super::width::{add_into, sub_into, Width};

/// Per `(frame, depth)` plane of `npix` elements: `plane[i] -= plane[i-1]` for
/// `i` from `npix-1` down to `1`; `plane[0]` is untouched.
pub fn difference_plane(buf: &mut [u8], w: Width, npix: usize) {
    for i in (1..npix).rev() {
        sub_into(buf, i, i - 1, w);
    }
}

/// Inverse of [`difference_plane`]: ascending prefix sum.
pub fn undifference_plane(buf: &mut [u8], w: Width, npix: usize) {
    for i in 1..npix {
        add_into(buf, i, i - 1, w);
    }
}

/// Applies [`difference_plane`] to every `(frame, depth)` plane of a
/// `width*height*depth*frames`-element raw buffer.
pub fn difference(buf: &mut [u8], w: Width, npix: usize, depth: u32, frames: u32) {
    let planes = depth as usize * frames as usize;
    for p in 0..planes {
        let start = p * npix * w.bytes();
        let end = start + npix * w.bytes();
        difference_plane(&mut buf[start..end], w, npix);
    }
}

/// Inverse of [`difference`].
pub fn undifference(buf: &mut [u8], w: Width, npix: usize, depth: u32, frames: u32) {
    let planes = depth as usize * frames as usize;
    for p in 0..planes {
        let start = p * npix * w.bytes();
        let end = start + npix * w.bytes();
        undifference_plane(&mut buf[start..end], w, npix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_round_trips() {
        for w in [Width::W8, Width::W16, Width::W32, Width::W64] {
            let npix = 9;
            let mut buf = vec![0u8; npix * w.bytes()];
            for (i, b) in buf.iter_mut().enumerate() {
                *b = (i * 41 % 199) as u8;
            }
            let original = buf.clone();
            difference_plane(&mut buf, w, npix);
            undifference_plane(&mut buf, w, npix);
            assert_eq!(buf, original);
        }
    }

    #[test]
    fn multi_plane_round_trips() {
        let w = Width::W16;
        let npix = 7;
        let depth = 2;
        let frames = 3;
        let total = npix * depth as usize * frames as usize;
        let mut buf = vec![0u8; total * w.bytes()];
        for (i, b) in buf.iter_mut().enumerate() {
            *b = (i * 17 % 233) as u8;
        }
        let original = buf.clone();
        difference(&mut buf, w, npix, depth, frames);
        undifference(&mut buf, w, npix, depth, frames);
        assert_eq!(buf, original);
    }

    #[test]
    fn single_pixel_plane_is_noop() {
        let w = Width::W16;
        let mut buf = vec![5u8, 9];
        let original = buf.clone();
        difference_plane(&mut buf, w, 1);
        assert_eq!(buf, original);
    }
}
