//! Error types for byte cursor and sink operations.

use std::fmt;
use std::io;

/// Result type for bytestream operations.
pub type ByteResult<T> = Result<T, ByteError>;

/// Errors that can occur while reading or writing fixed-width values and strings.
#[derive(Debug)]
pub enum ByteError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEof {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A string is longer than the encodable limit.
    StringTooLong {
        /// Encoded length of the string in bytes.
        len: usize,
        /// Maximum allowed length in bytes.
        max: usize,
    },

    /// No terminator was found inside the scan window although data remained.
    UnterminatedString {
        /// Offset where the string starts.
        offset: usize,
        /// Size of the scan window in bytes.
        window: usize,
    },

    /// String bytes are not valid UTF-8.
    InvalidUtf8 {
        /// Offset where the string starts.
        offset: usize,
        /// Number of leading bytes that were valid.
        valid_up_to: usize,
    },

    /// The underlying output stream failed.
    Io(io::Error),
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::StringTooLong { len, max } => {
                write!(f, "string of {len} bytes exceeds the {max} byte limit")
            }
            Self::UnterminatedString { offset, window } => {
                write!(
                    f,
                    "no string terminator within {window} bytes of offset {offset}"
                )
            }
            Self::InvalidUtf8 {
                offset,
                valid_up_to,
            } => {
                write!(
                    f,
                    "invalid utf-8 in string at offset {offset} after {valid_up_to} valid bytes"
                )
            }
            Self::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl std::error::Error for ByteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ByteError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
