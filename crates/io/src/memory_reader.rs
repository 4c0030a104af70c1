// Copyright (C) 2023-2025 The Meridian Project.
//
// memory_reader.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Zero-copy reading over in-memory wire data.

use crate::error::{IoError, IoResult};

/// A position-tracked reader over a borrowed byte buffer.
///
/// Every read checks the remaining length first and fails with
/// [`IoError::UnexpectedEof`] instead of panicking. Returned byte strings are
/// views into the underlying buffer, never copies; the reader must not
/// outlive the bytes it was created over.
pub struct MemoryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline(always)]
    fn ensure(&self, count: usize) -> IoResult<()> {
        if count > self.data.len() - self.pos {
            Err(IoError::UnexpectedEof { offset: self.pos })
        } else {
            Ok(())
        }
    }

    /// Current read position.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes left to read.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Rewinds the position by `count` bytes, re-exposing already-scanned
    /// input. Used to capture a consumed region as one contiguous view.
    ///
    /// `count` must not exceed `pos()`.
    pub fn back_up(&mut self, count: usize) {
        debug_assert!(count <= self.pos, "rewind past buffer start");
        self.pos -= count;
    }

    /// Returns the next byte without advancing.
    pub fn peek(&self) -> IoResult<u8> {
        self.ensure(1)?;
        Ok(self.data[self.pos])
    }

    /// Reads a single byte.
    #[inline(always)]
    pub fn read_byte(&mut self) -> IoResult<u8> {
        self.ensure(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads a boolean encoded as a single `0x00`/`0x01` byte.
    pub fn read_bool(&mut self) -> IoResult<bool> {
        let offset = self.pos;
        match self.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(IoError::IrregularData {
                what: "boolean",
                offset,
            }),
        }
    }

    /// Reads a little-endian `u16`.
    #[inline(always)]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        self.ensure(2)?;
        let mut buf = [0u8; 2];
        buf.copy_from_slice(&self.data[self.pos..self.pos + 2]);
        self.pos += 2;
        Ok(u16::from_le_bytes(buf))
    }

    /// Reads a little-endian `u32`.
    #[inline(always)]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        self.ensure(4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.data[self.pos..self.pos + 4]);
        self.pos += 4;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads a little-endian `u64`.
    #[inline(always)]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        self.ensure(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.data[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(u64::from_le_bytes(buf))
    }

    /// Reads a variable-length unsigned integer.
    ///
    /// Values below `0xfd` occupy one byte; prefixes `0xfd`/`0xfe`/`0xff`
    /// introduce a little-endian u16/u32/u64. The encoding must be minimal:
    /// a wider-than-necessary form fails with [`IoError::IrregularData`].
    pub fn read_var_uint(&mut self) -> IoResult<u64> {
        let offset = self.pos;
        let first = self.read_byte()?;
        match first {
            0xfd => {
                let value = u64::from(self.read_u16()?);
                if value < 0xfd {
                    return Err(IoError::IrregularData {
                        what: "var-uint",
                        offset,
                    });
                }
                Ok(value)
            }
            0xfe => {
                let value = u64::from(self.read_u32()?);
                if value <= 0xffff {
                    return Err(IoError::IrregularData {
                        what: "var-uint",
                        offset,
                    });
                }
                Ok(value)
            }
            0xff => {
                let value = self.read_u64()?;
                if value <= 0xffff_ffff {
                    return Err(IoError::IrregularData {
                        what: "var-uint",
                        offset,
                    });
                }
                Ok(value)
            }
            _ => Ok(u64::from(first)),
        }
    }

    /// Reads `count` bytes as a view into the underlying buffer.
    #[inline(always)]
    pub fn read_bytes(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure(count)?;
        let result = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    /// Reads a var-uint length prefix followed by that many bytes.
    pub fn read_var_bytes(&mut self) -> IoResult<&'a [u8]> {
        let length = self.read_var_uint()?;
        if length > self.remaining() as u64 {
            return Err(IoError::UnexpectedEof { offset: self.pos });
        }
        self.read_bytes(length as usize)
    }

    /// Reads a var-bytes field that must contain UTF-8 text.
    pub fn read_var_string(&mut self) -> IoResult<String> {
        let offset = self.pos;
        let bytes = self.read_var_bytes()?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| IoError::InvalidData(format!("invalid utf-8 string at offset {offset}")))
    }
}
