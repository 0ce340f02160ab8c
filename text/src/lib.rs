//! YAML text form for UserGameStatsSchema trees.
//!
//! Trees from [`codec`] are rendered as YAML block mappings. Text stays plain
//! YAML strings; typed scalars become custom-tagged scalars such as
//! `!Int32 7` or `!Color 4278190335`, so a binary file can be edited as text
//! and rebuilt without losing any wire type.
//!
//! # Example
//!
//! ```
//! use codec::CodecLimits;
//!
//! let yaml = "game:\n  version: !Int32 2\n";
//! let limits = CodecLimits::default();
//! let bytes = text::yaml_to_bin(yaml, &limits).unwrap();
//! assert_eq!(text::bin_to_yaml(&bytes, &limits).unwrap(), yaml);
//! ```

mod error;
mod path;
mod raw;
mod tags;
mod yaml;

use codec::{decode_document, encode_document_to_vec, CodecLimits};

pub use error::{TextError, TextResult};
pub use path::KeyPath;
pub use tags::{kind_for_tag, scalar_to_value};
pub use yaml::{from_yaml_reader, from_yaml_str, node_to_value, to_yaml_string};

/// Decodes a binary schema and renders it as YAML.
///
/// # Errors
///
/// Returns an error if the binary input is malformed.
pub fn bin_to_yaml(bytes: &[u8], limits: &CodecLimits) -> TextResult<String> {
    let root = decode_document(bytes, limits)?;
    to_yaml_string(&root)
}

/// Parses YAML and encodes it as a binary schema.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a value cannot be encoded.
pub fn yaml_to_bin(text: &str, limits: &CodecLimits) -> TextResult<Vec<u8>> {
    let root = from_yaml_str(text)?;
    Ok(encode_document_to_vec(&root, limits)?)
}
