// config.rs — Compile-time configuration constants and handle-level defaults.
//
// Corresponds to the tunable fields of `xrif_handle` (xrif.h) that are not
// part of the wire format: compressor parameters and parallelism controls.

/// Default LZ4 acceleration factor. Corresponds to `XRIF_LZ4_ACCEL_DEFAULT`.
pub const LZ4_ACCEL_DEFAULT: i32 = 1;
/// Valid LZ4 acceleration range (xrif.h), inclusive.
pub const LZ4_ACCEL_MIN: i32 = 1;
pub const LZ4_ACCEL_MAX: i32 = 65537;

/// Default LZ4HC compression level.
pub const LZ4HC_LEVEL_DEFAULT: i32 = 9;
pub const LZ4HC_LEVEL_MIN: i32 = 3;
pub const LZ4HC_LEVEL_MAX: i32 = 12;

/// FastLZ-class backend levels (1 = faster, 2 = better ratio).
pub const FASTLZ_LEVEL_DEFAULT: i32 = 1;
pub const FASTLZ_LEVEL_MIN: i32 = 1;
pub const FASTLZ_LEVEL_MAX: i32 = 2;

/// zstd level; `0` means "use the backend's own default".
pub const ZSTD_LEVEL_DEFAULT: i32 = 0;

/// zlib/deflate level and strategy ranges.
pub const ZLIB_LEVEL_DEFAULT: i32 = 6;
pub const ZLIB_LEVEL_MIN: i32 = 0;
pub const ZLIB_LEVEL_MAX: i32 = 9;

/// Whether a handle compresses in place into the raw buffer by default.
/// Corresponds to `compress_on_raw` defaulting true in `xrif_initialize_handle`.
pub const COMPRESS_ON_RAW_DEFAULT: bool = true;

/// Upper bound on the number of reorder/pixel1 worker threads a handle will
/// request, regardless of detected physical core count. Mirrors the
/// teacher's `NB_WORKERS_MAX`-style ceiling on auto-detected parallelism.
pub const PARALLEL_THREADS_MAX: usize = 64;

/// Resolves the default worker-thread count: physical core count, capped at
/// [`PARALLEL_THREADS_MAX`].
pub fn default_thread_count() -> usize {
    num_cpus::get_physical().min(PARALLEL_THREADS_MAX)
}
