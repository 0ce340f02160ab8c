//! Error types for wire tag decoding.

use std::fmt;

use crate::tag::WireTag;

/// Result type for wire format operations.
pub type WireResult<T> = Result<T, DecodeError>;

/// Tag-level decode errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A byte read as a tag is outside the defined range.
    UnknownTag {
        /// The raw byte.
        tag: u8,
        /// Position of the byte in the input.
        offset: usize,
    },

    /// A defined tag that this codec cannot represent.
    UnsupportedTag {
        /// The tag that was read.
        tag: WireTag,
        /// Position of the tag byte in the input.
        offset: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTag { tag, offset } => {
                write!(f, "unknown wire tag {tag} at offset {offset}")
            }
            Self::UnsupportedTag { tag, offset } => {
                write!(
                    f,
                    "unsupported wire tag {} ({}) at offset {offset}",
                    tag.code(),
                    tag.name()
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
