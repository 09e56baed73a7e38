//! Verbosity-gated diagnostic printing.
//!
//! Mirrors the `DISPLAYLEVEL`/`DISPLAY`/`DISPLAYOUT` macro family from the
//! reference CLI rather than pulling in a logging facade: the library core
//! performs no I/O of its own (the pipeline never calls these macros
//! directly), so the verbosity level only matters to the `xrif` binary.
//! 0 = silent, 1 = errors only, 2 = normal, 3 = verbose, 4 = trace.

use std::sync::atomic::{AtomicU32, Ordering};

pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Unconditional stdout print — equivalent to the reference CLI's `DISPLAYOUT`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Unconditional stderr print — equivalent to the reference CLI's `DISPLAY`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Stderr print gated on the current verbosity level — equivalent to the
/// reference CLI's `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::logging::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}
