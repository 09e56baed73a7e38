//! Boundary-condition round-trips: frame counts at the edges of the
//! differencing window, odd dimensions that stress stride rounding, and the
//! signed-type extremes that stress sign-fold/wraparound arithmetic.

use xrif::{CompressMethod, DifferenceMethod, Handle, ReorderMethod, TypeCode};

fn filled(n: usize, seed: u8) -> Vec<u8> {
    (0..n)
        .map(|i| ((i as u32).wrapping_mul(2246822519).wrapping_add(seed as u32) & 0xFF) as u8)
        .collect()
}

fn round_trip_bytes(
    width: u32,
    height: u32,
    depth: u32,
    frames: u32,
    type_code: TypeCode,
    diff: DifferenceMethod,
    reorder: ReorderMethod,
    compress: CompressMethod,
    raw: Vec<u8>,
) -> Handle {
    let mut h = Handle::new();
    h.set_size(width, height, depth, frames, type_code).unwrap();
    h.configure(diff, reorder, compress).unwrap();
    h.allocate().unwrap();
    assert_eq!(raw.len(), h.raw_buffer.len());
    h.raw_buffer.as_mut_slice().copy_from_slice(&raw);

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &raw[..]);
    h
}

#[test]
fn single_frame_has_no_inter_frame_effect() {
    let mut h = Handle::new();
    h.set_size(6, 6, 1, 1, TypeCode::Int16).unwrap();
    h.configure(
        DifferenceMethod::Previous,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();
    let raw = filled(h.raw_buffer.len(), 1);
    h.raw_buffer.as_mut_slice().copy_from_slice(&raw);

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &raw[..]);
}

#[test]
fn two_frames_single_pair_round_trips() {
    round_trip_bytes(
        5,
        5,
        1,
        2,
        TypeCode::Int16,
        DifferenceMethod::Previous,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
        filled(5 * 5 * 2 * 2, 2),
    );
}

#[test]
fn large_frame_count_round_trips() {
    round_trip_bytes(
        4,
        4,
        1,
        500,
        TypeCode::Int16,
        DifferenceMethod::Previous,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
        filled(4 * 4 * 500 * 2, 3),
    );
}

#[test]
fn odd_width_and_height_round_trip() {
    round_trip_bytes(
        17,
        13,
        1,
        3,
        TypeCode::Int16,
        DifferenceMethod::First,
        ReorderMethod::BytepackRenibble,
        CompressMethod::Lz4,
        filled(17 * 13 * 3 * 2, 4),
    );
}

#[test]
fn odd_plane_count_rounds_renibble_stride() {
    round_trip_bytes(
        4,
        4,
        3,
        2,
        TypeCode::Uint16,
        DifferenceMethod::Previous,
        ReorderMethod::BytepackRenibble,
        CompressMethod::Lz4,
        filled(4 * 4 * 3 * 2 * 2, 5),
    );
}

#[test]
fn plane_count_not_multiple_of_16_exercises_bitpack_tail() {
    // P = width*height*depth = 10*10*1 = 100, not a multiple of 16.
    round_trip_bytes(
        10,
        10,
        1,
        5,
        TypeCode::Uint16,
        DifferenceMethod::Pixel0,
        ReorderMethod::Bitpack,
        CompressMethod::Zstd,
        filled(10 * 10 * 5 * 2, 6),
    );
}

#[test]
fn plane_count_exactly_16_has_no_bitpack_tail() {
    round_trip_bytes(
        4,
        4,
        1,
        4,
        TypeCode::Int16,
        DifferenceMethod::Previous,
        ReorderMethod::Bitpack,
        CompressMethod::Lz4,
        filled(4 * 4 * 4 * 2, 7),
    );
}

#[test]
fn maximum_negative_i16_round_trips() {
    let mut h = Handle::new();
    h.set_size(3, 3, 1, 2, TypeCode::Int16).unwrap();
    h.configure(
        DifferenceMethod::Previous,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();

    // Every element at i16::MIN, the asymmetric extreme that breaks a naive
    // sign-fold implementation (there is no positive counterpart to negate).
    for chunk in h.raw_buffer.as_mut_slice().chunks_mut(2) {
        chunk.copy_from_slice(&i16::MIN.to_le_bytes());
    }
    let original = h.raw_buffer.as_slice().to_vec();

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &original[..]);
}

#[test]
fn maximum_negative_i32_round_trips() {
    let mut h = Handle::new();
    h.set_size(3, 3, 1, 2, TypeCode::Int32).unwrap();
    h.configure(
        DifferenceMethod::Previous,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();

    for chunk in h.raw_buffer.as_mut_slice().chunks_mut(4) {
        chunk.copy_from_slice(&i32::MIN.to_le_bytes());
    }
    let original = h.raw_buffer.as_slice().to_vec();

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &original[..]);
}

#[test]
fn alternating_extremes_round_trip_on_previous_difference() {
    let mut h = Handle::new();
    h.set_size(2, 2, 1, 4, TypeCode::Int16).unwrap();
    h.configure(
        DifferenceMethod::Previous,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();

    let mut values = Vec::new();
    for i in 0..(h.raw_buffer.len() / 2) {
        let v = if i % 2 == 0 { i16::MIN } else { i16::MAX };
        values.extend_from_slice(&v.to_le_bytes());
    }
    h.raw_buffer.as_mut_slice().copy_from_slice(&values);

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &values[..]);
}
