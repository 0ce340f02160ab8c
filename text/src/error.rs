//! Error types for the YAML text form.

use std::fmt;

use codec::{CodecError, ErrorKind, ScalarKind};

/// Result type for text conversions.
pub type TextResult<T> = Result<T, TextError>;

/// Errors that can occur while converting between YAML and trees.
#[derive(Debug)]
pub enum TextError {
    /// The YAML could not be parsed or emitted.
    Yaml(serde_yaml::Error),

    /// The top-level YAML document is not a mapping.
    RootNotMapping { found: &'static str },

    /// A mapping key is not a string.
    NonStringKey { path: String, key: String },

    /// A key repeats within one mapping.
    DuplicateKey { path: String, key: String },

    /// An emitted digit key would load back as a number.
    UnquotedKey { path: String },

    /// A value has no binary representation.
    UnsupportedValue { path: String, found: String },

    /// A tagged scalar's literal does not fit its kind.
    InvalidScalar {
        path: String,
        kind: ScalarKind,
        literal: String,
    },

    /// Binary decoding or encoding failed.
    Codec(CodecError),
}

impl TextError {
    /// Returns the failure class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Yaml(_) => ErrorKind::Syntax,
            Self::RootNotMapping { .. } | Self::UnsupportedValue { .. } => {
                ErrorKind::UnsupportedFeature
            }
            Self::NonStringKey { .. }
            | Self::UnquotedKey { .. }
            | Self::InvalidScalar { .. } => ErrorKind::InvalidSchemaValue,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::Codec(err) => err.kind(),
        }
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "yaml error: {e}"),
            Self::RootNotMapping { found } => {
                write!(f, "top-level document must be a mapping, found {found}")
            }
            Self::NonStringKey { path, key } => {
                write!(f, "key {key} at {path} must be a quoted string")
            }
            Self::DuplicateKey { path, key } => {
                write!(f, "duplicate key {key} in mapping at {path}")
            }
            Self::UnquotedKey { path } => {
                write!(f, "digit key at {path} was not emitted as a quoted string")
            }
            Self::UnsupportedValue { path, found } => {
                write!(f, "{found} at {path} has no binary representation")
            }
            Self::InvalidScalar {
                path,
                kind,
                literal,
            } => {
                write!(f, "\"{literal}\" at {path} is not a valid {kind}")
            }
            Self::Codec(e) => write!(f, "codec error: {e}"),
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for TextError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

impl From<CodecError> for TextError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}
