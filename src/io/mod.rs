//! Low-level byte order and safe reading/writing utilities.
//!
//! This module provides endian-aware, bounds-checked reads and writes of primitive integers
//! from and into byte buffers. The `prefixMap` blob is little-endian throughout, so only the
//! little-endian direction is offered.
//!
//! # Key Components
//!
//! - [`crate::io::ByteIO`] - Trait connecting a primitive integer to its byte array form
//! - [`crate::io::read_le`] / [`crate::io::read_le_at`] - Reading with optional offset tracking
//! - [`crate::io::write_le_at`] - Writing with offset tracking
//! - [`crate::io::Parser`] - Cursor over a byte slice, including base-128 group decoding
//!
//! # Usage Examples
//!
//! ```rust
//! use attrtyp::io::{read_le_at, write_le_at};
//!
//! let mut data = [0u8; 6];
//! let mut offset = 0;
//! write_le_at(&mut data, &mut offset, 0x643Bu16)?;
//! write_le_at(&mut data, &mut offset, 10u32)?;
//! assert_eq!(data, [0x3B, 0x64, 0x0A, 0x00, 0x00, 0x00]);
//!
//! let mut offset = 0;
//! let prefix: u16 = read_le_at(&data, &mut offset)?;
//! assert_eq!(prefix, 0x643B);
//! assert_eq!(offset, 2);
//! # Ok::<(), attrtyp::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All functions return [`crate::Error::OutOfBounds`] if the buffer is too short. Callers
//! that expose a public parsing operation translate this into their own error kind.

mod parser;

pub use parser::Parser;

use crate::{Error::OutOfBounds, Result};

/// Trait for type-specific safe binary data reading and writing.
///
/// Each implementation names the fixed-size byte array for its type (e.g. `[u8; 4]` for
/// `u32`), which the free functions of this module move in and out of buffers.
pub trait ByteIO: Sized {
    /// Byte array representation of the type.
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte array in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Write T to a byte array in little-endian
    fn to_le_bytes(self) -> Self::Bytes;
}

macro_rules! impl_byte_io {
    ($($ty:ty => $len:literal),* $(,)?) => {
        $(
            impl ByteIO for $ty {
                type Bytes = [u8; $len];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

impl_byte_io!(u8 => 1, u16 => 2, u32 => 4, u64 => 8);

/// Safely reads a value of type `T` in little-endian byte order from the start of a buffer.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le<T: ByteIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Safely reads a value of type `T` in little-endian byte order at `offset`, advancing the
/// offset by the size of `T`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes. The offset is left
/// untouched in that case.
pub fn read_le_at<T: ByteIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

/// Safely writes a value of type `T` in little-endian byte order at `offset`, advancing the
/// offset by the size of `T`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the buffer cannot hold the value.
pub fn write_le_at<T: ByteIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    data[*offset..end].copy_from_slice(value.to_le_bytes().as_ref());
    *offset = end;

    Ok(())
}

/// Copies `bytes` into `data` at `offset`, advancing the offset.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the buffer cannot hold the bytes.
pub fn write_bytes_at(data: &mut [u8], offset: &mut usize, bytes: &[u8]) -> Result<()> {
    let Some(end) = offset.checked_add(bytes.len()) else {
        return Err(OutOfBounds);
    };
    if end > data.len() {
        return Err(OutOfBounds);
    }

    data[*offset..end].copy_from_slice(bytes);
    *offset = end;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn test_read_le_u8() {
        let result = read_le::<u8>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x01);
    }

    #[test]
    fn test_read_le_u16() {
        let result = read_le::<u16>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0201);
    }

    #[test]
    fn test_read_le_u32() {
        let result = read_le::<u32>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn test_read_le_u64() {
        let result = read_le::<u64>(&TEST_BUFFER).unwrap();
        assert_eq!(result, 0x0807_0605_0403_0201);
    }

    #[test]
    fn test_read_le_at_advances() {
        let mut offset = 2;
        let value: u16 = read_le_at(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(value, 0x0403);
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_read_le_out_of_bounds_keeps_offset() {
        let mut offset = 6;
        let result: Result<u32> = read_le_at(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
        assert_eq!(offset, 6);

        let mut offset = usize::MAX;
        let result: Result<u8> = read_le_at(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds)));
    }

    #[test]
    fn test_write_le_at_sequence() {
        let mut data = [0u8; 8];
        let mut offset = 0;

        write_le_at(&mut data, &mut offset, 2u32).unwrap();
        write_le_at(&mut data, &mut offset, 0x25u32).unwrap();
        assert_eq!(offset, 8);
        assert_eq!(data, [0x02, 0x00, 0x00, 0x00, 0x25, 0x00, 0x00, 0x00]);

        assert!(matches!(
            write_le_at(&mut data, &mut offset, 1u8),
            Err(Error::OutOfBounds)
        ));
    }

    #[test]
    fn test_write_bytes_at_bounds() {
        let mut data = [0u8; 4];
        let mut offset = 1;
        write_bytes_at(&mut data, &mut offset, &[0xAA, 0xBB]).unwrap();
        assert_eq!(data, [0x00, 0xAA, 0xBB, 0x00]);
        assert_eq!(offset, 3);

        assert!(matches!(
            write_bytes_at(&mut data, &mut offset, &[0x01, 0x02]),
            Err(Error::OutOfBounds)
        ));
        assert_eq!(offset, 3);
    }
}
