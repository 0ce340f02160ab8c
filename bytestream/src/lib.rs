//! Little-endian byte cursor and sink for the UserGameStatsSchema codec.
//!
//! This crate provides [`ByteReader`] and [`ByteWriter`] for fixed-width and
//! NUL-terminated string encoding and decoding.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked, strings are length-limited.
//! - **No domain knowledge** - This crate knows nothing about tags, keys, or trees.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new(Vec::new());
//! writer.write_cstring("name").unwrap();
//! writer.write_u32_le(42).unwrap();
//!
//! let bytes = writer.finish().unwrap();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_cstring().unwrap(), "name");
//! assert_eq!(reader.read_u32_le().unwrap(), 42);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::{check_cstring, ByteWriter};

/// Number of bytes scanned for a string terminator, terminator included.
pub const CSTRING_WINDOW: usize = 128;

/// Longest string payload that can be written or read, in UTF-8 bytes.
pub const MAX_CSTRING_BYTES: usize = CSTRING_WINDOW - 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new(Vec::new());
        let bytes = writer.finish().unwrap();
        assert!(bytes.is_empty());

        let reader = ByteReader::new(&bytes);
        assert!(reader.is_empty());
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new(Vec::new());
        writer.write_u8(3).unwrap();
        writer.write_cstring("AchievementName").unwrap();
        writer.write_f32_le(-0.25).unwrap();
        writer.write_u8(7).unwrap();
        writer.write_cstring("").unwrap();
        writer.write_u64_le(76_561_197_960_265_728).unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 3);
        assert_eq!(reader.read_cstring().unwrap(), "AchievementName");
        assert_eq!(reader.read_f32_le().unwrap().to_bits(), (-0.25f32).to_bits());
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_cstring().unwrap(), "");
        assert_eq!(reader.read_u64_le().unwrap(), 76_561_197_960_265_728);
        assert!(reader.is_empty());
    }

    #[test]
    fn window_and_limit_agree() {
        assert_eq!(MAX_CSTRING_BYTES + 1, CSTRING_WINDOW);
    }

    #[test]
    fn longest_writable_string_is_readable() {
        let value = "k".repeat(MAX_CSTRING_BYTES);
        let mut writer = ByteWriter::new(Vec::new());
        writer.write_cstring(&value).unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_cstring().unwrap(), value);
    }
}
