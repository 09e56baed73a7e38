//! Pixel type registry.
//!
//! Corresponds to `xrif_typesize` / `xrif_ts_difference` and the `XRIF_TYPECODE_*`
//! constants in xrif.h.

/// A pixel element type tag, stored as `u16` in the stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TypeCode {
    Int8 = 1,
    Uint8 = 2,
    Int16 = 3,
    Uint16 = 4,
    Int32 = 5,
    Uint32 = 6,
    Int64 = 7,
    Uint64 = 8,
    Half = 9,
    Float = 10,
    Double = 11,
    ComplexFloat = 12,
    ComplexDouble = 13,
}

impl TypeCode {
    /// Round-trips a raw header type code back into a [`TypeCode`].
    /// Returns `None` for unknown tags, mirroring `xrif_typesize`'s `0` return.
    pub fn from_raw(raw: u16) -> Option<Self> {
        Some(match raw {
            1 => TypeCode::Int8,
            2 => TypeCode::Uint8,
            3 => TypeCode::Int16,
            4 => TypeCode::Uint16,
            5 => TypeCode::Int32,
            6 => TypeCode::Uint32,
            7 => TypeCode::Int64,
            8 => TypeCode::Uint64,
            9 => TypeCode::Half,
            10 => TypeCode::Float,
            11 => TypeCode::Double,
            12 => TypeCode::ComplexFloat,
            13 => TypeCode::ComplexDouble,
            _ => return None,
        })
    }

    /// The raw numeric tag stored in the header.
    pub fn raw(self) -> u16 {
        self as u16
    }

    /// Size in bytes of one element of this type. Never zero for a valid `TypeCode`;
    /// the "0 for unknown" case from the spec's `typesize` lives in [`typesize_raw`].
    pub fn size(self) -> usize {
        match self {
            TypeCode::Int8 | TypeCode::Uint8 => 1,
            TypeCode::Int16 | TypeCode::Uint16 | TypeCode::Half => 2,
            TypeCode::Int32 | TypeCode::Uint32 | TypeCode::Float => 4,
            TypeCode::Int64 | TypeCode::Uint64 | TypeCode::Double | TypeCode::ComplexFloat => 8,
            TypeCode::ComplexDouble => 16,
        }
    }

    /// Whether this type is accepted by the integer differencing/reordering paths.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TypeCode::Int8
                | TypeCode::Uint8
                | TypeCode::Int16
                | TypeCode::Uint16
                | TypeCode::Int32
                | TypeCode::Uint32
                | TypeCode::Int64
                | TypeCode::Uint64
        )
    }

    /// Byte width used by 16-bit-only reorder paths (bytepack-renibble, bitpack, bayer).
    pub fn is_16_bit(self) -> bool {
        matches!(self, TypeCode::Int16 | TypeCode::Uint16)
    }
}

/// Total function: size in bytes of the given raw type tag, or `0` if unknown.
/// This is the one in-band ("0 means error") reporting point named by the spec;
/// everywhere else, an unknown type is rejected with [`crate::error::XrifError::InvalidType`].
pub fn typesize_raw(raw: u16) -> usize {
    TypeCode::from_raw(raw).map(TypeCode::size).unwrap_or(0)
}

/// Bytes consumed by one differencing unit for `t` — identical to [`TypeCode::size`]
/// today, kept as a distinct name because the authoritative library exposes it
/// separately (`xrif_ts_difference`) for methods that may someday difference at a
/// coarser granularity than one element.
pub fn ts_difference(t: TypeCode) -> usize {
    t.size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_raw_type_sizes_to_zero() {
        assert_eq!(typesize_raw(0), 0);
        assert_eq!(typesize_raw(255), 0);
    }

    #[test]
    fn known_sizes() {
        assert_eq!(typesize_raw(TypeCode::Int16.raw()), 2);
        assert_eq!(typesize_raw(TypeCode::Int64.raw()), 8);
        assert_eq!(typesize_raw(TypeCode::ComplexDouble.raw()), 16);
    }

    #[test]
    fn raw_round_trip() {
        for raw in 1u16..=13 {
            let t = TypeCode::from_raw(raw).unwrap();
            assert_eq!(t.raw(), raw);
        }
    }
}
