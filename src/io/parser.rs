//! Cursor-based byte stream parser.
//!
//! [`crate::io::Parser`] keeps a position within a byte slice and offers bounds-checked
//! reads of little-endian integers, raw byte runs and big-endian base-128 groups (the
//! sub-identifier encoding of BER object identifiers).
//!
//! # Examples
//!
//! ```rust
//! use attrtyp::io::Parser;
//!
//! let data = [0x3B, 0x64, 0x0A, 0x00, 0x82, 0x8B, 0x13];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_le::<u16>()?, 0x643B);
//! assert_eq!(parser.read_le::<u16>()?, 10);
//! assert_eq!(parser.read_base128()?, 34195);
//! assert!(!parser.has_more_data());
//! # Ok::<(), attrtyp::Error>(())
//! ```

use crate::{
    io::{read_le_at, ByteIO},
    Error::OutOfBounds,
    Result,
};

/// A cursor over a byte slice.
///
/// All reads validate data availability first; a failed read never moves the cursor.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] from a byte slice.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Number of bytes left between the cursor and the end of the data.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Execute a closure transactionally, rolling the position back on failure.
    ///
    /// # Errors
    /// Returns any error produced by `f`, with the position restored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrtyp::io::Parser;
    ///
    /// let mut parser = Parser::new(&[0x01]);
    /// let result: attrtyp::Result<u32> = parser.transactional(|p| p.read_le());
    /// assert!(result.is_err());
    /// assert_eq!(parser.pos(), 0);
    /// ```
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_position = self.position;
        let result = f(self);
        if result.is_err() {
            self.position = saved_position;
        }
        result
    }

    /// Read a type `T` from the current position in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: ByteIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Borrow the next `length` bytes and advance past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        if length > self.remaining() {
            return Err(OutOfBounds);
        }

        let bytes = &self.data[self.position..self.position + length];
        self.position += length;
        Ok(bytes)
    }

    /// Read one big-endian base-128 group.
    ///
    /// Every byte but the last has its high bit set; the low seven bits of each byte are
    /// concatenated most-significant first. The value is accumulated in a `u64`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the data ends before a byte with a clear
    /// high bit, or [`crate::Error::MalformedBerEncoding`] if the group does not fit in 64 bits.
    /// The position is not advanced on error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attrtyp::io::Parser;
    ///
    /// let mut parser = Parser::new(&[0x83, 0x24]);
    /// assert_eq!(parser.read_base128()?, 420);
    /// # Ok::<(), attrtyp::Error>(())
    /// ```
    pub fn read_base128(&mut self) -> Result<u64> {
        let mut value = 0u64;
        let mut cursor = self.position;

        loop {
            let Some(&byte) = self.data.get(cursor) else {
                return Err(OutOfBounds);
            };
            cursor += 1;

            if value > (u64::MAX >> 7) {
                return Err(malformed_ber_error!(
                    "base-128 group starting at offset {} overflows 64 bits",
                    self.position
                ));
            }
            value = (value << 7) | u64::from(byte & 0x7F);

            if byte & 0x80 == 0 {
                self.position = cursor;
                return Ok(value);
            }
        }
    }
}
