//! Byte-level cursor with bounded operations.

use crate::error::{ByteError, ByteResult};
use crate::CSTRING_WINDOW;

/// A sequential reader over an in-memory byte buffer.
///
/// All read operations are bounds-checked and return errors on failure.
/// A failed read leaves the position unchanged; successful reads only move forward.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new `ByteReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> ByteResult<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads a little-endian `i32`.
    pub fn read_i32_le(&mut self) -> ByteResult<i32> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32_le(&mut self) -> ByteResult<u32> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Reads a little-endian IEEE-754 `f32`.
    pub fn read_f32_le(&mut self) -> ByteResult<f32> {
        self.read_array::<4>().map(f32::from_le_bytes)
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64_le(&mut self) -> ByteResult<u64> {
        self.read_array::<8>().map(u64::from_le_bytes)
    }

    /// Reads a NUL-terminated UTF-8 string.
    ///
    /// The terminator must appear within [`CSTRING_WINDOW`] bytes of the current
    /// position, so the longest readable string is one byte shorter than the window.
    /// When the buffer ends inside the window the error is
    /// [`ByteError::UnexpectedEof`]; a full window without a terminator is
    /// [`ByteError::UnterminatedString`].
    pub fn read_cstring(&mut self) -> ByteResult<&'a str> {
        let rest = &self.data[self.pos..];
        let window = &rest[..rest.len().min(CSTRING_WINDOW)];

        let Some(len) = window.iter().position(|&b| b == 0) else {
            if rest.len() < CSTRING_WINDOW {
                return Err(ByteError::UnexpectedEof {
                    requested: rest.len() + 1,
                    available: rest.len(),
                });
            }
            return Err(ByteError::UnterminatedString {
                offset: self.pos,
                window: CSTRING_WINDOW,
            });
        };

        let text = std::str::from_utf8(&window[..len]).map_err(|err| ByteError::InvalidUtf8 {
            offset: self.pos,
            valid_up_to: err.valid_up_to(),
        })?;
        self.pos += len + 1;
        Ok(text)
    }

    fn read_array<const N: usize>(&mut self) -> ByteResult<[u8; N]> {
        let available = self.remaining();
        if N > available {
            return Err(ByteError::UnexpectedEof {
                requested: N,
                available,
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
