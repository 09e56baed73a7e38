//! Exercises the `xrif` binary itself: encode/decode/inspect subcommands
//! invoked as a subprocess, round-tripping through real files.

use std::process::Command;

fn xrif_bin() -> &'static str {
    env!("CARGO_BIN_EXE_xrif")
}

fn filled(n: usize, seed: u8) -> Vec<u8> {
    (0..n)
        .map(|i| ((i as u32).wrapping_mul(2654435761).wrapping_add(seed as u32) & 0xFF) as u8)
        .collect()
}

#[test]
fn encode_then_decode_round_trips_through_the_binary() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.bin");
    let encoded_path = dir.path().join("encoded.xrif");
    let decoded_path = dir.path().join("decoded.bin");

    let raw = filled(16 * 16 * 2, 9);
    std::fs::write(&raw_path, &raw).unwrap();

    let encode_status = Command::new(xrif_bin())
        .args([
            "encode",
            raw_path.to_str().unwrap(),
            encoded_path.to_str().unwrap(),
            "--width",
            "16",
            "--height",
            "16",
            "--type",
            "i16",
            "--diff",
            "previous",
            "--reorder",
            "bytepack",
            "--compress",
            "lz4",
        ])
        .status()
        .unwrap();
    assert!(encode_status.success());
    assert!(encoded_path.exists());

    let decode_status = Command::new(xrif_bin())
        .args([
            "decode",
            encoded_path.to_str().unwrap(),
            decoded_path.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(decode_status.success());

    let decoded = std::fs::read(&decoded_path).unwrap();
    assert_eq!(decoded, raw);
}

#[test]
fn inspect_reports_the_header_fields() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.bin");
    let encoded_path = dir.path().join("encoded.xrif");

    std::fs::write(&raw_path, filled(8 * 8, 1)).unwrap();

    let status = Command::new(xrif_bin())
        .args([
            "encode",
            raw_path.to_str().unwrap(),
            encoded_path.to_str().unwrap(),
            "--width",
            "8",
            "--height",
            "8",
            "--type",
            "u8",
            "--diff",
            "none",
            "--reorder",
            "none",
            "--compress",
            "none",
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let output = Command::new(xrif_bin())
        .args(["inspect", encoded_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("width: 8"));
    assert!(stdout.contains("height: 8"));
}

#[test]
fn encode_rejects_a_mismatched_input_size() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.bin");
    let encoded_path = dir.path().join("encoded.xrif");

    // 8x8 i16 expects 128 bytes; give it far less.
    std::fs::write(&raw_path, vec![0u8; 4]).unwrap();

    let status = Command::new(xrif_bin())
        .args([
            "encode",
            raw_path.to_str().unwrap(),
            encoded_path.to_str().unwrap(),
            "--width",
            "8",
            "--height",
            "8",
            "--type",
            "i16",
        ])
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!encoded_path.exists());
}

#[test]
fn decode_rejects_a_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.xrif");
    let out = dir.path().join("out.bin");

    let status = Command::new(xrif_bin())
        .args(["decode", missing.to_str().unwrap(), out.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn verbose_flag_emits_diagnostics_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.bin");
    let encoded_path = dir.path().join("encoded.xrif");
    std::fs::write(&raw_path, filled(4 * 4 * 2, 2)).unwrap();

    let output = Command::new(xrif_bin())
        .args([
            "-vvv",
            "encode",
            raw_path.to_str().unwrap(),
            encoded_path.to_str().unwrap(),
            "--width",
            "4",
            "--height",
            "4",
            "--type",
            "i16",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("xrif:"));
}

#[test]
fn accel_and_level_flags_round_trip_through_lz4hc() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("raw.bin");
    let encoded_path = dir.path().join("encoded.xrif");
    let decoded_path = dir.path().join("decoded.bin");

    let raw = filled(32 * 32 * 2, 5);
    std::fs::write(&raw_path, &raw).unwrap();

    let status = Command::new(xrif_bin())
        .args([
            "encode",
            raw_path.to_str().unwrap(),
            encoded_path.to_str().unwrap(),
            "--width",
            "32",
            "--height",
            "32",
            "--type",
            "i16",
            "--compress",
            "lz4hc",
            "--level",
            "3",
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let status = Command::new(xrif_bin())
        .args([
            "decode",
            encoded_path.to_str().unwrap(),
            decoded_path.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&decoded_path).unwrap(), raw);
}
