// Copyright (C) 2023-2025 The Meridian Project.
//
// uint256.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt256`, a 256-bit hash value.

use std::fmt;
use std::str::FromStr;

use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::constants::UINT256_SIZE;
use crate::error::{CoreError, CoreResult};

/// A 256-bit value identifying a transaction (or block) by its double-SHA256
/// hash.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    /// The all-zero value.
    pub const ZERO: UInt256 = UInt256([0u8; UINT256_SIZE]);

    /// Creates a `UInt256` from a byte slice of exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        if value.len() != UINT256_SIZE {
            return Err(CoreError::InvalidFormat { what: "hash" });
        }
        let mut bytes = [0u8; UINT256_SIZE];
        bytes.copy_from_slice(value);
        Ok(Self(bytes))
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.0
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(value: [u8; UINT256_SIZE]) -> Self {
        Self(value)
    }
}

impl Serializable for UInt256 {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        let mut bytes = [0u8; UINT256_SIZE];
        bytes.copy_from_slice(reader.read_bytes(UINT256_SIZE)?);
        Ok(Self(bytes))
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({self})")
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let bytes = hex::decode(s).map_err(|_| CoreError::InvalidFormat { what: "hash" })?;
        Self::from_bytes(&bytes)
    }
}

impl serde::Serialize for UInt256 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for UInt256 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
