//! Stable error codes for the XRIF codec.
//!
//! Corresponds to the `xrif_error_t` family in xrif.h: a signed integer error
//! space shared by every public entry point. Discriminants are fixed and must
//! not be renumbered — callers may persist or compare raw codes across an ABI
//! boundary.

use std::fmt;

/// Error codes returned by XRIF core operations.
///
/// | Variant | C equivalent |
/// |---|---|
/// | [`XrifError::NoError`] | `XRIF_NOERROR` (0) |
/// | [`XrifError::NullPtr`] | `XRIF_ERROR_NULLPTR` (-5) |
/// | [`XrifError::NotSetup`] | `XRIF_ERROR_NOT_SETUP` (-10) |
/// | [`XrifError::InvalidSize`] | `XRIF_ERROR_INVALID_SIZE` (-20) |
/// | [`XrifError::InvalidType`] | `XRIF_ERROR_INVALID_TYPE` (-22) |
/// | [`XrifError::InsufficientSize`] | `XRIF_ERROR_INSUFFICIENT_SIZE` (-25) |
/// | [`XrifError::Malloc`] | `XRIF_ERROR_MALLOC` (-30) |
/// | [`XrifError::NotImpl`] | `XRIF_ERROR_NOTIMPL` (-100) |
/// | [`XrifError::BadHeader`] | `XRIF_ERROR_BADHEADER` (-1000) |
/// | [`XrifError::WrongVersion`] | `XRIF_ERROR_WRONGVERSION` (-1010) |
/// | [`XrifError::BadArg`] | `XRIF_ERROR_BADARG` (-1020) |
/// | [`XrifError::Failure`] | `XRIF_ERROR_FAILURE` (-1030) |
/// | [`XrifError::InvalidConfig`] | `XRIF_ERROR_INVALID_CONFIG` (-1040) |
/// | [`XrifError::Liberr`] | `XRIF_ERROR_LIBERR` (-1050), carries the backend's own code |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrifError {
    /// No error. Rarely constructed directly — success is `Ok(_)`.
    NoError,
    /// A required pointer/buffer was null/empty.
    NullPtr,
    /// The handle has not been configured with a valid size yet.
    NotSetup,
    /// A (pointer, size) pair was inconsistent, or a dimension was invalid.
    InvalidSize,
    /// The type code does not name a known element type.
    InvalidType,
    /// A caller-supplied buffer is smaller than the operation's minimum.
    InsufficientSize,
    /// An allocation failed.
    Malloc,
    /// The requested method/type combination is not implemented.
    NotImpl,
    /// Header magic did not match `"xrif"`.
    BadHeader,
    /// Header version is not supported by this implementation.
    WrongVersion,
    /// A caller-supplied argument was out of range.
    BadArg,
    /// Unclassified failure.
    Failure,
    /// The handle's configuration is inconsistent with the requested operation
    /// (e.g. a stateful compressor used in the wrong direction).
    InvalidConfig,
    /// A backend compression library reported an error; `.0` is its own code.
    Liberr(i32),
}

impl XrifError {
    /// Human-readable name, matching the authoritative library's error-string table.
    pub fn name(&self) -> &'static str {
        match self {
            XrifError::NoError => "NOERROR",
            XrifError::NullPtr => "ERROR_NULLPTR",
            XrifError::NotSetup => "ERROR_NOT_SETUP",
            XrifError::InvalidSize => "ERROR_INVALID_SIZE",
            XrifError::InvalidType => "ERROR_INVALID_TYPE",
            XrifError::InsufficientSize => "ERROR_INSUFFICIENT_SIZE",
            XrifError::Malloc => "ERROR_MALLOC",
            XrifError::NotImpl => "ERROR_NOTIMPL",
            XrifError::BadHeader => "ERROR_BADHEADER",
            XrifError::WrongVersion => "ERROR_WRONGVERSION",
            XrifError::BadArg => "ERROR_BADARG",
            XrifError::Failure => "ERROR_FAILURE",
            XrifError::InvalidConfig => "ERROR_INVALID_CONFIG",
            XrifError::Liberr(_) => "ERROR_LIBERR",
        }
    }

    /// The stable numeric code, as used on the wire / by callers comparing against §6.
    pub fn code(&self) -> i32 {
        match self {
            XrifError::NoError => 0,
            XrifError::NullPtr => -5,
            XrifError::NotSetup => -10,
            XrifError::InvalidSize => -20,
            XrifError::InvalidType => -22,
            XrifError::InsufficientSize => -25,
            XrifError::Malloc => -30,
            XrifError::NotImpl => -100,
            XrifError::BadHeader => -1000,
            XrifError::WrongVersion => -1010,
            XrifError::BadArg => -1020,
            XrifError::Failure => -1030,
            XrifError::InvalidConfig => -1040,
            XrifError::Liberr(_) => -1050,
        }
    }

    /// Returns `true` for anything other than `NoError`.
    #[inline]
    pub fn is_error(&self) -> bool {
        !matches!(self, XrifError::NoError)
    }
}

impl fmt::Display for XrifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XrifError::Liberr(code) => write!(f, "{} (backend code {})", self.name(), code),
            other => write!(f, "{} ({})", other.name(), other.code()),
        }
    }
}

impl std::error::Error for XrifError {}

/// Convenience alias used throughout the core modules.
pub type Result<T> = std::result::Result<T, XrifError>;
