// Copyright (C) 2023-2025 The Meridian Project.
//
// binary_writer.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Append-only binary sink.

/// A growable little-endian byte sink.
///
/// This is a pure accumulator, not an I/O stream: writes cannot fail and the
/// buffer grows as needed.
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with at least `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the writer, returning the accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Writes a single byte.
    pub fn write_byte(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Writes a boolean as `0x00`/`0x01`.
    pub fn write_bool(&mut self, value: bool) {
        self.buffer.push(value as u8);
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes a var-uint in its canonical-minimal form.
    pub fn write_var_uint(&mut self, value: u64) {
        if value < 0xfd {
            self.buffer.push(value as u8);
        } else if value <= 0xffff {
            self.buffer.push(0xfd);
            self.write_u16(value as u16);
        } else if value <= 0xffff_ffff {
            self.buffer.push(0xfe);
            self.write_u32(value as u32);
        } else {
            self.buffer.push(0xff);
            self.write_u64(value);
        }
    }

    /// Writes a var-uint length prefix followed by the bytes.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_var_uint(bytes.len() as u64);
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes a string as length-prefixed UTF-8 bytes.
    pub fn write_var_string(&mut self, value: &str) {
        self.write_var_bytes(value.as_bytes());
    }
}
