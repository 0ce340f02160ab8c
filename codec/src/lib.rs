//! Binary tree decoding and encoding for UserGameStatsSchema files.
//!
//! This is the main codec crate that ties together bytestream and wire to turn
//! a schema file into an ordered [`Node`] tree and back.
//!
//! # Features
//!
//! - Recursive decoding of the tag-key-payload entry grammar
//! - Encoding that reproduces the input byte for byte
//! - Typed scalars that keep their wire kind through text round trips
//! - Depth and size limits for untrusted input
//!
//! # Design Principles
//!
//! - **Correctness first** - Every byte is attributed to an entry or an error.
//! - **Order preserving** - Entries are kept and written in insertion order.
//! - **No logging** - Failures are returned as classified errors.
//!
//! # Example
//!
//! ```
//! use codec::{decode_document, encode_document_to_vec, CodecLimits, Node, TypedScalar};
//!
//! let mut stats = Node::new();
//! stats.insert("max", TypedScalar::Int32(100));
//! let mut root = Node::new();
//! root.insert("stats", stats);
//!
//! let limits = CodecLimits::default();
//! let bytes = encode_document_to_vec(&root, &limits).unwrap();
//! assert_eq!(decode_document(&bytes, &limits).unwrap(), root);
//! ```

mod decode;
mod encode;
mod error;
mod limits;
mod types;

pub use decode::{decode_document, decode_node};
pub use encode::{encode_document, encode_document_to_vec, encode_node, encoded_len};
pub use error::{CodecError, CodecResult, ErrorKind, LimitKind};
pub use limits::CodecLimits;
pub use types::{Key, Node, ScalarKind, TreeValue, TypedScalar};
pub use wire::WireTag;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = CodecLimits::default();
        let _ = ScalarKind::ALL;
        let _ = WireTag::MappingEnd;
        let _: CodecResult<()> = Ok(());
    }

    #[test]
    fn doctest_example() {
        let mut stats = Node::new();
        stats.insert("max", TypedScalar::Int32(100));
        let mut root = Node::new();
        root.insert("stats", stats);

        let limits = CodecLimits::default();
        let bytes = encode_document_to_vec(&root, &limits).unwrap();
        assert_eq!(decode_document(&bytes, &limits).unwrap(), root);
    }
}
