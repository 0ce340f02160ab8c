//! Tree to binary encoding.

use std::io::Write;

use bytestream::{check_cstring, ByteWriter};
use wire::WireTag;

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::types::{Node, TreeValue, TypedScalar};

/// Encodes a complete document into `writer`.
///
/// The root's closing tag is the last byte written.
pub fn encode_document<W: Write>(
    root: &Node,
    writer: &mut ByteWriter<W>,
    limits: &CodecLimits,
) -> CodecResult<()> {
    encode_node(root, writer, 0, limits)
}

/// Encodes a complete document into a new buffer.
pub fn encode_document_to_vec(root: &Node, limits: &CodecLimits) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::new(Vec::with_capacity(encoded_len(root)));
    encode_document(root, &mut writer, limits)?;
    Ok(writer.finish()?)
}

/// Encodes the entries of `node` followed by its `MAPPING_END`.
///
/// Each entry's key and text are length-checked before its tag is written, so
/// a failing entry leaves nothing of itself in the output.
pub fn encode_node<W: Write>(
    node: &Node,
    writer: &mut ByteWriter<W>,
    depth: usize,
    limits: &CodecLimits,
) -> CodecResult<()> {
    for (key, value) in node {
        check_cstring(key.as_str())?;
        match value {
            TreeValue::Mapping(child) => {
                let child_depth = depth + 1;
                if child_depth > limits.max_depth {
                    return Err(CodecError::LimitsExceeded {
                        kind: LimitKind::Depth,
                        limit: limits.max_depth,
                        actual: child_depth,
                    });
                }
                writer.write_u8(WireTag::MappingBegin.code())?;
                writer.write_cstring(key.as_str())?;
                encode_node(child, writer, child_depth, limits)?;
            }
            TreeValue::Text(text) => {
                check_cstring(text)?;
                writer.write_u8(WireTag::String.code())?;
                writer.write_cstring(key.as_str())?;
                writer.write_cstring(text)?;
            }
            TreeValue::Scalar(scalar) => {
                writer.write_u8(scalar.wire_tag().code())?;
                writer.write_cstring(key.as_str())?;
                write_scalar(writer, *scalar)?;
            }
        }
    }
    writer.write_u8(WireTag::MappingEnd.code())?;
    Ok(())
}

/// Returns the number of bytes [`encode_document`] writes for `root`.
#[must_use]
pub fn encoded_len(root: &Node) -> usize {
    let entries: usize = root
        .iter()
        .map(|(key, value)| {
            let payload = match value {
                TreeValue::Mapping(child) => encoded_len(child),
                TreeValue::Text(text) => text.len() + 1,
                TreeValue::Scalar(scalar) => scalar.wire_tag().fixed_width().unwrap_or(0),
            };
            1 + key.as_str().len() + 1 + payload
        })
        .sum();
    entries + 1
}

fn write_scalar<W: Write>(writer: &mut ByteWriter<W>, scalar: TypedScalar) -> CodecResult<()> {
    match scalar {
        TypedScalar::Int32(v) => writer.write_i32_le(v)?,
        TypedScalar::Float32(v) => writer.write_f32_le(v)?,
        TypedScalar::Pointer(v) | TypedScalar::Color(v) => writer.write_u32_le(v)?,
        TypedScalar::UInt64(v) => writer.write_u64_le(v)?,
    }
    Ok(())
}
