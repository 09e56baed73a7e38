//! Subcommand implementations: converts the library's `XrifError` results
//! into `anyhow::Error` at this single boundary (spec §4.9) and performs the
//! file I/O the library core never does itself.

use std::fs;

use anyhow::{bail, Context, Result};

use crate::cli::args::{Command, DecodeArgs, EncodeArgs, InspectArgs};
use crate::handle::Handle;
use crate::header::{Header, HEADER_SIZE};
use crate::methods::{CompressMethod, DifferenceMethod, ReorderMethod};
use crate::pipeline;
use crate::{displaylevel, logging};

/// Dispatches a parsed subcommand, returning the process exit code.
pub fn run(command: Command, verbose: u8) -> i32 {
    logging::set_display_level(verbose as u32);
    let result = match command {
        Command::Encode(args) => encode(args),
        Command::Decode(args) => decode(args),
        Command::Inspect(args) => inspect(args),
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            displaylevel!(1, "xrif: error: {e:#}");
            1
        }
    }
}

fn encode(args: EncodeArgs) -> Result<()> {
    let raw = fs::read(&args.input).with_context(|| format!("reading {}", args.input))?;

    let type_code: crate::types::TypeCode = args.r#type.into();
    let diff_method: DifferenceMethod = args.diff.into();
    let reorder_method: ReorderMethod = args.reorder.into();
    let compress_method: CompressMethod = args.compress.into();

    let mut handle = Handle::new();
    handle
        .set_size(args.width, args.height, args.depth, args.frames, type_code)
        .context("invalid geometry")?;
    handle
        .configure(diff_method, reorder_method, compress_method)
        .context("invalid configuration")?;
    if let Some(accel) = args.accel {
        handle.lz4_acceleration = accel as u16;
    }
    handle.compress_level = args.level;

    let expected_len = handle.raw_elems() * type_code.size();
    if raw.len() != expected_len {
        bail!(
            "input file is {} bytes, expected {expected_len} for the given geometry",
            raw.len()
        );
    }

    handle.allocate().context("allocating buffers")?;
    handle.raw_buffer.as_mut_slice().copy_from_slice(&raw);

    displaylevel!(2, "xrif: encoding {} -> {}", args.input, args.output);
    let stats = pipeline::encode(&mut handle).context("encode pipeline failed")?;
    displaylevel!(
        3,
        "xrif: compression_ratio={:.3} encode_time={}ns",
        stats.compression_ratio(),
        stats.encode_time()
    );

    let header = Header {
        width: handle.width,
        height: handle.height,
        depth: handle.depth,
        frames: handle.frames,
        type_code: type_code.raw(),
        difference_method: diff_method.raw(),
        reorder_method: reorder_method.raw(),
        compress_method: compress_method.raw(),
        lz4_acceleration: handle.lz4_acceleration,
    };

    let mut out = Vec::with_capacity(HEADER_SIZE + stats.compressed_size);
    out.extend_from_slice(&header.write());
    out.extend_from_slice(&handle.compressed_buffer.as_slice()[..stats.compressed_size]);
    fs::write(&args.output, &out).with_context(|| format!("writing {}", args.output))?;
    Ok(())
}

fn decode(args: DecodeArgs) -> Result<()> {
    let stream = fs::read(&args.input).with_context(|| format!("reading {}", args.input))?;
    let (header, consumed) = Header::read(&stream).context("parsing header")?;
    let type_code = header.type_code().context("unknown type code in header")?;
    let diff_method = DifferenceMethod::from_raw(header.difference_method)
        .context("unknown difference method in header")?;
    let reorder_method = ReorderMethod::from_raw(header.reorder_method)
        .context("unknown reorder method in header")?;
    let compress_method = CompressMethod::from_raw(header.compress_method)
        .context("unknown compress method in header")?;

    let mut handle = Handle::new();
    handle
        .set_size(
            header.width,
            header.height,
            header.depth,
            header.frames,
            type_code,
        )
        .context("invalid geometry in header")?;
    handle
        .configure(diff_method, reorder_method, compress_method)
        .context("invalid configuration in header")?;
    handle.lz4_acceleration = header.lz4_acceleration;
    handle.allocate().context("allocating buffers")?;

    let payload = &stream[consumed..];
    handle.compressed_buffer.as_mut_slice()[..payload.len()].copy_from_slice(payload);

    displaylevel!(2, "xrif: decoding {} -> {}", args.input, args.output);
    let stats = pipeline::decode(&mut handle, payload.len()).context("decode pipeline failed")?;
    displaylevel!(3, "xrif: decoded {} bytes", stats.raw_size);

    fs::write(&args.output, handle.raw_buffer.as_slice())
        .with_context(|| format!("writing {}", args.output))?;
    Ok(())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let stream = fs::read(&args.input).with_context(|| format!("reading {}", args.input))?;
    let (header, _consumed) = Header::read(&stream).context("parsing header")?;
    let type_code = header
        .type_code()
        .map(|t| format!("{t:?}"))
        .unwrap_or_else(|| "unknown".to_string());

    displayout_header(&header, &type_code);
    Ok(())
}

fn displayout_header(header: &Header, type_code: &str) {
    crate::displayout!("width: {}\n", header.width);
    crate::displayout!("height: {}\n", header.height);
    crate::displayout!("depth: {}\n", header.depth);
    crate::displayout!("frames: {}\n", header.frames);
    crate::displayout!("type: {}\n", type_code);
    crate::displayout!("difference_method: {}\n", header.difference_method);
    crate::displayout!("reorder_method: {}\n", header.reorder_method);
    crate::displayout!("compress_method: {}\n", header.compress_method);
    crate::displayout!("lz4_acceleration: {}\n", header.lz4_acceleration);
}
