//! Bitpack reordering (16-bit only): a full bit-plane transpose of each
//! sign-folded pixel into 16 planes of densely packed bits.
//!
//! Corresponds to `xrif_reorder_bitpack_sint16` /
//! `xrif_unreorder_bitpack_sint16` in xrif_reorder_bitpack.c. The reference
//! implementation accelerates the scatter with `bit_to_position`/`set_bits`
//! lookup tables; this port uses the bit-for-bit loop the source itself
//! documents as the defining, lookup-table-free algorithm (see §4.8 of the
//! design notes). 32- and 64-bit inputs are out of scope (`NotImpl`),
//! matching the reference dispatcher.

use super::foldsign::{fold, fold_inv};

/// Number of `u16` words per bit-plane needed to hold `npix` pixels.
pub fn stride_for(npix: usize) -> usize {
    npix.div_ceil(16).max(1)
}

/// Total reordered-buffer length (bytes) for `npix` pixels: 16 planes of
/// `stride_for(npix)` `u16` words each.
pub fn reordered_len(npix: usize) -> usize {
    16 * stride_for(npix) * 2
}

fn read_u16(buf: &[u8], word_idx: usize) -> u16 {
    u16::from_le_bytes([buf[2 * word_idx], buf[2 * word_idx + 1]])
}

fn write_u16(buf: &mut [u8], word_idx: usize, val: u16) {
    buf[2 * word_idx..2 * word_idx + 2].copy_from_slice(&val.to_le_bytes());
}

/// `raw`: `npix` little-endian `i16` pixels. `out`: exactly
/// [`reordered_len`]`(npix)` bytes.
pub fn reorder(raw: &[u8], out: &mut [u8], npix: usize) {
    let stride = stride_for(npix);
    out.fill(0);
    for pix in 0..npix {
        let s = i16::from_le_bytes([raw[2 * pix], raw[2 * pix + 1]]);
        let us = fold(s);
        let sbyte = pix / 16;
        let bit = pix % 16;
        for b in 0..16u32 {
            if (us >> b) & 1 == 1 {
                let word_idx = b as usize * stride + sbyte;
                let cur = read_u16(out, word_idx);
                write_u16(out, word_idx, cur | (1 << bit));
            }
        }
    }
}

/// Inverse of [`reorder`].
pub fn unreorder(reordered: &[u8], raw: &mut [u8], npix: usize) {
    let stride = stride_for(npix);
    for pix in 0..npix {
        let sbyte = pix / 16;
        let bit = pix % 16;
        let mut us: u16 = 0;
        for b in 0..16u32 {
            let word_idx = b as usize * stride + sbyte;
            let word = read_u16(reordered, word_idx);
            if (word >> bit) & 1 == 1 {
                us |= 1 << b;
            }
        }
        let s = fold_inv(us);
        let bytes = s.to_le_bytes();
        raw[2 * pix] = bytes[0];
        raw[2 * pix + 1] = bytes[1];
    }
}
