//! XRIF — a lossless differencing/reordering/compression codec for integer
//! pixel-stream blocks.
//!
//! The library core (`buffer`, `header`, `types`, `methods`, `difference`,
//! `reorder`, `compress`, `handle`, `pipeline`) never performs I/O and only
//! returns [`error::XrifError`]/`Result`s; `cli` is the single place that
//! converts those into `anyhow::Error` for the `xrif` binary.

pub mod buffer;
pub mod cli;
pub mod compress;
pub mod config;
pub mod difference;
pub mod error;
pub mod handle;
pub mod header;
pub mod logging;
pub mod methods;
pub mod pipeline;
pub mod reorder;
pub mod threadpool;
pub mod timefn;
pub mod types;

pub use error::{Result, XrifError};
pub use handle::Handle;
pub use header::{Header, HEADER_SIZE};
pub use methods::{CompressMethod, DifferenceMethod, ReorderMethod};
pub use pipeline::{decode, encode, Stats, Timing};
pub use types::TypeCode;
