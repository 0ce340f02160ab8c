//! Byte-level sink for encoding little-endian binary data.

use std::io::Write;

use crate::error::{ByteError, ByteResult};
use crate::MAX_CSTRING_BYTES;

/// Checks that `value` fits the NUL-terminated string limit.
///
/// # Errors
///
/// Returns [`ByteError::StringTooLong`] if the UTF-8 length exceeds
/// [`MAX_CSTRING_BYTES`].
pub fn check_cstring(value: &str) -> ByteResult<()> {
    if value.len() > MAX_CSTRING_BYTES {
        return Err(ByteError::StringTooLong {
            len: value.len(),
            max: MAX_CSTRING_BYTES,
        });
    }
    Ok(())
}

/// A sequential writer over an output stream.
///
/// The sink owns its stream, so the stream is released exactly once when the
/// writer is dropped. Call [`finish`](Self::finish) to flush and recover it.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> ByteWriter<W> {
    /// Creates a new `ByteWriter` around `inner`.
    pub const fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub const fn bytes_written(&self) -> usize {
        self.written
    }

    /// Writes a single byte.
    pub fn write_u8(&mut self, value: u8) -> ByteResult<()> {
        self.write_raw(&[value])
    }

    /// Writes a little-endian `i32`.
    pub fn write_i32_le(&mut self, value: i32) -> ByteResult<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32_le(&mut self, value: u32) -> ByteResult<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes a little-endian IEEE-754 `f32`.
    pub fn write_f32_le(&mut self, value: f32) -> ByteResult<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64_le(&mut self, value: u64) -> ByteResult<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes `value` followed by a NUL terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ByteError::StringTooLong`] without writing anything if `value`
    /// is longer than [`MAX_CSTRING_BYTES`].
    pub fn write_cstring(&mut self, value: &str) -> ByteResult<()> {
        check_cstring(value)?;
        self.write_raw(value.as_bytes())?;
        self.write_raw(&[0])
    }

    /// Flushes the stream and returns it.
    pub fn finish(mut self) -> ByteResult<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> ByteResult<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}
