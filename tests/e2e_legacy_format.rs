//! Legacy reference-frame layout: `first`/`previous0` preserve frame 0
//! unreordered at the front of the reordered buffer, with only the
//! trailing `F-1` frames differenced and reordered (spec §9 decision).

use xrif::{CompressMethod, DifferenceMethod, Handle, ReorderMethod, TypeCode};

fn filled(n: usize, seed: u8) -> Vec<u8> {
    (0..n)
        .map(|i| ((i as u32).wrapping_mul(40503).wrapping_add(seed as u32) & 0xFF) as u8)
        .collect()
}

#[test]
fn previous0_round_trips_full_pipeline() {
    let mut h = Handle::new();
    h.set_size(6, 6, 1, 5, TypeCode::Int16).unwrap();
    h.configure(
        DifferenceMethod::Previous0,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();

    let original = filled(h.raw_buffer.len(), 11);
    h.raw_buffer.as_mut_slice().copy_from_slice(&original);

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &original[..]);
}

#[test]
fn previous0_frame_zero_is_untouched_in_reordered_buffer() {
    let mut h = Handle::new();
    h.set_size(4, 4, 1, 3, TypeCode::Uint16).unwrap();
    h.configure(
        DifferenceMethod::Previous0,
        ReorderMethod::None,
        CompressMethod::None,
    )
    .unwrap();
    h.allocate().unwrap();

    let original = filled(h.raw_buffer.len(), 23);
    h.raw_buffer.as_mut_slice().copy_from_slice(&original);

    xrif::encode(&mut h).unwrap();

    let frame_bytes = 4 * 4 * 2;
    assert_eq!(
        &h.reordered_buffer.as_slice()[..frame_bytes],
        &original[..frame_bytes],
        "frame 0 must be copied into the reordered buffer unreordered and undifferenced"
    );
}

#[test]
fn previous0_rejects_non_16_bit_types() {
    let mut h = Handle::new();
    h.set_size(4, 4, 1, 2, TypeCode::Int32).unwrap();
    h.configure(
        DifferenceMethod::Previous0,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();
    let len = h.raw_buffer.len();
    h.raw_buffer.as_mut_slice().copy_from_slice(&filled(len, 1));

    let err = xrif::encode(&mut h).unwrap_err();
    assert_eq!(err, xrif::XrifError::NotImpl);
}

#[test]
fn first_legacy_layout_round_trips_with_bitpack() {
    let mut h = Handle::new();
    h.set_size(8, 8, 1, 4, TypeCode::Uint16).unwrap();
    h.configure(
        DifferenceMethod::First,
        ReorderMethod::Bitpack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();

    let original = filled(h.raw_buffer.len(), 31);
    h.raw_buffer.as_mut_slice().copy_from_slice(&original);

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &original[..]);
}

#[test]
fn previous0_single_frame_has_no_trailing_data() {
    // F=1: the whole buffer is "frame 0"; there is nothing left for the
    // legacy differenced/reordered tail.
    let mut h = Handle::new();
    h.set_size(3, 3, 1, 1, TypeCode::Int16).unwrap();
    h.configure(
        DifferenceMethod::Previous0,
        ReorderMethod::Bytepack,
        CompressMethod::Lz4,
    )
    .unwrap();
    h.allocate().unwrap();

    let original = filled(h.raw_buffer.len(), 44);
    h.raw_buffer.as_mut_slice().copy_from_slice(&original);

    let enc = xrif::encode(&mut h).unwrap();
    xrif::decode(&mut h, enc.compressed_size).unwrap();
    assert_eq!(h.raw_buffer.as_slice(), &original[..]);
}
