//! Wire tags for the UserGameStatsSchema binary format.
//!
//! The format is a tree of tagged entries. Every entry starts with a one-byte
//! [`WireTag`], then a NUL-terminated key, then a payload whose shape depends
//! on the tag:
//!
//! ```text
//! document  := entry* MAPPING_END
//! entry     := tag key payload?
//! payload   := MAPPING_BEGIN -> entry* MAPPING_END
//!            | STRING -> cstring | INT32 -> i32 | FLOAT32 -> f32
//!            | POINTER -> u32 | COLOR -> u32 | UINT64 -> u64
//! ```
//!
//! All integers are little-endian. This crate only knows the tag vocabulary;
//! building trees out of entries is the job of the codec crate.

mod error;
mod tag;

pub use error::{DecodeError, WireResult};
pub use tag::WireTag;
