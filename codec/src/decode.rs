//! Binary to tree decoding.

use bytestream::ByteReader;
use wire::{DecodeError, WireTag};

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::types::{Key, Node, ScalarKind, TreeValue, TypedScalar};

/// What follows a key, given the tag in front of it.
enum EntryKind {
    Mapping,
    Text,
    Scalar(ScalarKind),
}

/// Decodes a complete document.
///
/// The buffer must end exactly at the root mapping's closing tag; running out
/// of bytes before it, or having bytes after it, are both errors.
pub fn decode_document(bytes: &[u8], limits: &CodecLimits) -> CodecResult<Node> {
    if bytes.len() > limits.max_input_bytes {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::InputBytes,
            limit: limits.max_input_bytes,
            actual: bytes.len(),
        });
    }

    let mut reader = ByteReader::new(bytes);
    let root = decode_node(&mut reader, 0, limits)?;
    if !reader.is_empty() {
        return Err(CodecError::TrailingData {
            offset: reader.position(),
            remaining: reader.remaining(),
        });
    }
    Ok(root)
}

/// Decodes entries up to and including the next `MAPPING_END`.
///
/// `depth` is the nesting level of the node being decoded, 0 for the root.
pub fn decode_node(
    reader: &mut ByteReader<'_>,
    depth: usize,
    limits: &CodecLimits,
) -> CodecResult<Node> {
    let mut node = Node::new();
    loop {
        let offset = reader.position();
        let tag = WireTag::parse(reader.read_u8()?, offset)?;
        let Some(entry) = entry_kind(tag, offset)? else {
            return Ok(node);
        };

        let key_offset = reader.position();
        let key = Key::new(reader.read_cstring()?);
        if node.contains_key(key.as_str()) {
            return Err(CodecError::DuplicateKey {
                key: key.into_string(),
                offset: key_offset,
            });
        }

        let value = match entry {
            EntryKind::Mapping => {
                let child_depth = depth + 1;
                if child_depth > limits.max_depth {
                    return Err(CodecError::LimitsExceeded {
                        kind: LimitKind::Depth,
                        limit: limits.max_depth,
                        actual: child_depth,
                    });
                }
                TreeValue::Mapping(decode_node(reader, child_depth, limits)?)
            }
            EntryKind::Text => TreeValue::Text(reader.read_cstring()?.to_owned()),
            EntryKind::Scalar(kind) => TreeValue::Scalar(read_scalar(reader, kind)?),
        };
        node.insert(key, value);
    }
}

/// Returns `None` for the closing tag.
fn entry_kind(tag: WireTag, offset: usize) -> CodecResult<Option<EntryKind>> {
    let entry = match tag {
        WireTag::MappingEnd => return Ok(None),
        // Rejected before the key so the outcome does not depend on what follows.
        WireTag::WideString => return Err(DecodeError::UnsupportedTag { tag, offset }.into()),
        WireTag::MappingBegin => EntryKind::Mapping,
        WireTag::String => EntryKind::Text,
        WireTag::Int32 => EntryKind::Scalar(ScalarKind::Int32),
        WireTag::Float32 => EntryKind::Scalar(ScalarKind::Float32),
        WireTag::Pointer => EntryKind::Scalar(ScalarKind::Pointer),
        WireTag::Color => EntryKind::Scalar(ScalarKind::Color),
        WireTag::UInt64 => EntryKind::Scalar(ScalarKind::UInt64),
    };
    Ok(Some(entry))
}

fn read_scalar(reader: &mut ByteReader<'_>, kind: ScalarKind) -> CodecResult<TypedScalar> {
    let scalar = match kind {
        ScalarKind::Int32 => TypedScalar::Int32(reader.read_i32_le()?),
        ScalarKind::Float32 => TypedScalar::Float32(reader.read_f32_le()?),
        ScalarKind::Pointer => TypedScalar::Pointer(reader.read_u32_le()?),
        ScalarKind::Color => TypedScalar::Color(reader.read_u32_le()?),
        ScalarKind::UInt64 => TypedScalar::UInt64(reader.read_u64_le()?),
    };
    Ok(scalar)
}
