//! On-wire value tags.

use crate::error::DecodeError;

/// One-byte discriminator written before every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireTag {
    /// Opens a nested mapping; followed by a key and the nested entries.
    MappingBegin = 0,
    String = 1,
    Int32 = 2,
    Float32 = 3,
    Pointer = 4,
    /// Present in the format but not supported by this codec.
    WideString = 5,
    Color = 6,
    UInt64 = 7,
    /// Closes the enclosing mapping; carries no key and no payload.
    MappingEnd = 8,
}

impl WireTag {
    /// All tags in code order.
    pub const ALL: [Self; 9] = [
        Self::MappingBegin,
        Self::String,
        Self::Int32,
        Self::Float32,
        Self::Pointer,
        Self::WideString,
        Self::Color,
        Self::UInt64,
        Self::MappingEnd,
    ];

    /// Parses a tag from a raw byte read at `offset`.
    pub const fn parse(tag: u8, offset: usize) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(Self::MappingBegin),
            1 => Ok(Self::String),
            2 => Ok(Self::Int32),
            3 => Ok(Self::Float32),
            4 => Ok(Self::Pointer),
            5 => Ok(Self::WideString),
            6 => Ok(Self::Color),
            7 => Ok(Self::UInt64),
            8 => Ok(Self::MappingEnd),
            _ => Err(DecodeError::UnknownTag { tag, offset }),
        }
    }

    /// Returns the raw byte for this tag.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Size of the fixed-width payload following the key, if any.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Int32 | Self::Float32 | Self::Pointer | Self::Color => Some(4),
            Self::UInt64 => Some(8),
            Self::MappingBegin | Self::String | Self::WideString | Self::MappingEnd => None,
        }
    }

    /// Returns a short lowercase name, used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MappingBegin => "mapping-begin",
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::Pointer => "pointer",
            Self::WideString => "widestring",
            Self::Color => "color",
            Self::UInt64 => "uint64",
            Self::MappingEnd => "mapping-end",
        }
    }
}

impl From<WireTag> for u8 {
    fn from(tag: WireTag) -> Self {
        tag.code()
    }
}
