//! Limits for codec-level decoding and encoding.

/// Bounds enforced while walking a document in either direction.
///
/// Both walks recurse once per nested mapping, so `max_depth` also bounds
/// stack usage on hostile input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of mappings nested below the root.
    pub max_depth: usize,
    /// Maximum size of a binary document in bytes.
    pub max_input_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            // Real schemas nest four or five levels deep.
            max_depth: 128,
            max_input_bytes: 64 * 1024 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_depth: 8,
            max_input_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_input_bytes: usize::MAX,
        }
    }
}
