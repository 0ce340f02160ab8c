//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding or encoding a document.
#[derive(Debug)]
pub enum CodecError {
    /// Byte cursor or sink error.
    Bytes(bytestream::ByteError),

    /// Wire tag error.
    Wire(wire::DecodeError),

    /// A key occurs twice in the same mapping.
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// Offset of the second occurrence's key.
        offset: usize,
    },

    /// Bytes remain after the document's closing tag.
    TrailingData { offset: usize, remaining: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    Depth,
    InputBytes,
}

/// Classification of failures, used to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A fixed-width or string read ran past the end of the input.
    UnexpectedEndOfInput,
    /// A byte read as a wire tag is outside the defined range.
    InvalidTag,
    /// A string is longer than the encodable limit.
    StringTooLong,
    /// String bytes are not valid UTF-8.
    InvalidEncoding,
    /// The input uses a feature the codec does not support.
    UnsupportedFeature,
    /// A text value does not fit the domain its type implies.
    InvalidSchemaValue,
    /// A key repeats within one mapping.
    DuplicateKey,
    /// Bytes follow the document's closing tag.
    TrailingData,
    /// A configured limit was exceeded.
    LimitExceeded,
    /// Reading or writing a stream failed.
    Io,
    /// The text form could not be parsed.
    Syntax,
}

impl ErrorKind {
    /// Every failure class.
    pub const ALL: [Self; 11] = [
        Self::UnexpectedEndOfInput,
        Self::InvalidTag,
        Self::StringTooLong,
        Self::InvalidEncoding,
        Self::UnsupportedFeature,
        Self::InvalidSchemaValue,
        Self::DuplicateKey,
        Self::TrailingData,
        Self::LimitExceeded,
        Self::Io,
        Self::Syntax,
    ];

    /// Returns a short human-readable summary of the failure class.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::UnexpectedEndOfInput => "unexpected end of file",
            Self::InvalidTag => "unknown value type in file",
            Self::StringTooLong => "string exceeds 127 bytes",
            Self::InvalidEncoding => "string is not valid UTF-8",
            Self::UnsupportedFeature => "unsupported feature",
            Self::InvalidSchemaValue => "invalid schema value",
            Self::DuplicateKey => "duplicate key",
            Self::TrailingData => "unexpected data after end of schema",
            Self::LimitExceeded => "limit exceeded",
            Self::Io => "i/o failure",
            Self::Syntax => "malformed text input",
        }
    }
}

impl CodecError {
    /// Returns the failure class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Bytes(err) => match err {
                bytestream::ByteError::UnexpectedEof { .. } => ErrorKind::UnexpectedEndOfInput,
                bytestream::ByteError::StringTooLong { .. }
                | bytestream::ByteError::UnterminatedString { .. } => ErrorKind::StringTooLong,
                bytestream::ByteError::InvalidUtf8 { .. } => ErrorKind::InvalidEncoding,
                bytestream::ByteError::Io(_) => ErrorKind::Io,
            },
            Self::Wire(err) => match err {
                wire::DecodeError::UnknownTag { .. } => ErrorKind::InvalidTag,
                // Non-exhaustive upstream; anything else is a tag we cannot handle.
                _ => ErrorKind::UnsupportedFeature,
            },
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::TrailingData { .. } => ErrorKind::TrailingData,
            Self::LimitsExceeded { .. } => ErrorKind::LimitExceeded,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(e) => write!(f, "byte stream error: {e}"),
            Self::Wire(e) => write!(f, "wire error: {e}"),
            Self::DuplicateKey { key, offset } => {
                write!(f, "duplicate key \"{key}\" at offset {offset}")
            }
            Self::TrailingData { offset, remaining } => {
                write!(
                    f,
                    "{remaining} trailing bytes after document end at offset {offset}"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Depth => "nesting depth",
            Self::InputBytes => "input bytes",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bytes(e) => Some(e),
            Self::Wire(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Wire(err)
    }
}

impl From<bytestream::ByteError> for CodecError {
    fn from(err: bytestream::ByteError) -> Self {
        Self::Bytes(err)
    }
}
