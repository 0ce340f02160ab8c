//! Structural summary of a binary schema.

use std::fmt::Write as _;

use codec::{decode_document, CodecLimits, CodecResult, Node, TreeValue};
use serde::Serialize;
use wire::WireTag;

/// Size, digest and entry statistics for one decoded schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub bytes: usize,
    /// Hex blake3 digest of the raw file contents.
    pub blake3: String,
    pub entries: usize,
    pub tag_counts: Vec<TagCount>,
    /// Nesting depth of the deepest mapping; the root is depth 0.
    pub max_depth: usize,
    /// Keys made only of ASCII digits.
    pub digit_keys: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: &'static str,
    pub code: u8,
    pub count: usize,
}

/// Decodes `bytes` and summarizes the resulting tree.
pub fn inspect_document(bytes: &[u8], limits: &CodecLimits) -> CodecResult<InspectReport> {
    let root = decode_document(bytes, limits)?;

    let mut stats = TreeStats::default();
    stats.visit(&root, 0);

    let tag_counts = WireTag::ALL
        .into_iter()
        .filter_map(|tag| {
            let count = if tag == WireTag::MappingEnd {
                stats.mappings + 1
            } else {
                stats.per_tag[usize::from(tag.code())]
            };
            (count > 0).then_some(TagCount {
                tag: tag.name(),
                code: tag.code(),
                count,
            })
        })
        .collect();

    Ok(InspectReport {
        bytes: bytes.len(),
        blake3: blake3::hash(bytes).to_hex().to_string(),
        entries: stats.entries,
        tag_counts,
        max_depth: stats.max_depth,
        digit_keys: stats.digit_keys,
    })
}

#[derive(Default)]
struct TreeStats {
    entries: usize,
    mappings: usize,
    max_depth: usize,
    digit_keys: usize,
    per_tag: [usize; WireTag::ALL.len()],
}

impl TreeStats {
    fn visit(&mut self, node: &Node, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        for (key, value) in node {
            self.entries += 1;
            self.per_tag[usize::from(value.wire_tag().code())] += 1;
            if key.requires_quoting() {
                self.digit_keys += 1;
            }
            if let TreeValue::Mapping(child) = value {
                self.mappings += 1;
                self.visit(child, depth + 1);
            }
        }
    }
}

/// Renders a report for terminal output.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "size: {} bytes", report.bytes);
    let _ = writeln!(out, "blake3: {}", report.blake3);
    let _ = writeln!(
        out,
        "entries: {} (max depth {}, {} digit keys)",
        report.entries, report.max_depth, report.digit_keys
    );
    let _ = writeln!(out, "tags:");
    for count in &report.tag_counts {
        let _ = writeln!(
            out,
            "  {:<13} 0x{:02x}: {}",
            count.tag, count.code, count.count
        );
    }
    out
}
