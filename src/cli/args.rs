//! Argument definitions for the `xrif` binary (spec §6).

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::methods::{CompressMethod, DifferenceMethod, ReorderMethod};
use crate::types::TypeCode;

#[derive(Parser, Debug)]
#[command(name = "xrif", about = "Differencing/reordering/compression codec for integer pixel streams")]
pub struct Cli {
    /// Increase diagnostic verbosity (repeatable: -v, -vv, -vvv, -vvvv).
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a raw pixel file into an XRIF stream.
    Encode(EncodeArgs),
    /// Decode an XRIF stream back into a raw pixel file.
    Decode(DecodeArgs),
    /// Print the 48-byte header of an XRIF stream without decoding it.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    pub input: String,
    pub output: String,

    #[arg(long)]
    pub width: u32,
    #[arg(long)]
    pub height: u32,
    #[arg(long, default_value_t = 1)]
    pub depth: u32,
    #[arg(long, default_value_t = 1)]
    pub frames: u32,
    #[arg(long, value_enum)]
    pub r#type: CliTypeCode,

    #[arg(long, value_enum, default_value_t = CliDifferenceMethod::Previous)]
    pub diff: CliDifferenceMethod,
    #[arg(long, value_enum, default_value_t = CliReorderMethod::Bytepack)]
    pub reorder: CliReorderMethod,
    #[arg(long, value_enum, default_value_t = CliCompressMethod::Lz4)]
    pub compress: CliCompressMethod,

    /// LZ4 acceleration factor (1..=65537), only meaningful with `--compress lz4`.
    #[arg(long)]
    pub accel: Option<u32>,
    /// Backend compression level, meaning depends on `--compress`.
    #[arg(long)]
    pub level: Option<i32>,
    /// Reorder-stage worker thread count; 0 selects the platform default.
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    pub input: String,
    pub output: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    pub input: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CliTypeCode {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl From<CliTypeCode> for TypeCode {
    fn from(t: CliTypeCode) -> Self {
        match t {
            CliTypeCode::I8 => TypeCode::Int8,
            CliTypeCode::U8 => TypeCode::Uint8,
            CliTypeCode::I16 => TypeCode::Int16,
            CliTypeCode::U16 => TypeCode::Uint16,
            CliTypeCode::I32 => TypeCode::Int32,
            CliTypeCode::U32 => TypeCode::Uint32,
            CliTypeCode::I64 => TypeCode::Int64,
            CliTypeCode::U64 => TypeCode::Uint64,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CliDifferenceMethod {
    None,
    Previous,
    First,
    Pixel0,
    Pixel1,
    Bayer,
    Previous0,
}

impl From<CliDifferenceMethod> for DifferenceMethod {
    fn from(m: CliDifferenceMethod) -> Self {
        match m {
            CliDifferenceMethod::None => DifferenceMethod::None,
            CliDifferenceMethod::Previous => DifferenceMethod::Previous,
            CliDifferenceMethod::First => DifferenceMethod::First,
            CliDifferenceMethod::Pixel0 => DifferenceMethod::Pixel0,
            CliDifferenceMethod::Pixel1 => DifferenceMethod::Pixel1,
            CliDifferenceMethod::Bayer => DifferenceMethod::Bayer,
            CliDifferenceMethod::Previous0 => DifferenceMethod::Previous0,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CliReorderMethod {
    None,
    Bytepack,
    BytepackRenibble,
    Bitpack,
}

impl From<CliReorderMethod> for ReorderMethod {
    fn from(m: CliReorderMethod) -> Self {
        match m {
            CliReorderMethod::None => ReorderMethod::None,
            CliReorderMethod::Bytepack => ReorderMethod::Bytepack,
            CliReorderMethod::BytepackRenibble => ReorderMethod::BytepackRenibble,
            CliReorderMethod::Bitpack => ReorderMethod::Bitpack,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CliCompressMethod {
    None,
    Lz4,
    Lz4hc,
    Fastlz,
    Zstd,
    Zlib,
}

impl From<CliCompressMethod> for CompressMethod {
    fn from(m: CliCompressMethod) -> Self {
        match m {
            CliCompressMethod::None => CompressMethod::None,
            CliCompressMethod::Lz4 => CompressMethod::Lz4,
            CliCompressMethod::Lz4hc => CompressMethod::Lz4Hc,
            CliCompressMethod::Fastlz => CompressMethod::FastLz,
            CliCompressMethod::Zstd => CompressMethod::Zstd,
            CliCompressMethod::Zlib => CompressMethod::Zlib,
        }
    }
}
