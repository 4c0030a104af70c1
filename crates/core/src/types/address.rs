// Copyright (C) 2023-2025 The Meridian Project.
//
// address.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `Address`, a 160-bit account identifier.

use std::fmt;
use std::str::FromStr;

use meridian_cryptography::{hash160, hash256, PublicKey};
use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::constants::{ADDRESS_VERSION, ADDR_LEN};
use crate::error::{CoreError, CoreResult};
use crate::program;

/// A 160-bit account address.
///
/// Addresses are the Hash160 of a verification program, so the address an
/// account commits to on chain is exactly the one its signatures verify
/// against. They are never built by truncating or reinterpreting arbitrary
/// bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDR_LEN]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDR_LEN]);

    /// Creates an `Address` from a byte slice of exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        if value.len() != ADDR_LEN {
            return Err(CoreError::InvalidFormat { what: "address" });
        }
        let mut bytes = [0u8; ADDR_LEN];
        bytes.copy_from_slice(value);
        Ok(Self(bytes))
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8; ADDR_LEN] {
        &self.0
    }

    /// The address of a single-key account: Hash160 of its signature
    /// verification program.
    pub fn from_pubkey(pubkey: &PublicKey) -> Self {
        Self::from_vm_code(&program::signature_program(pubkey))
    }

    /// The address of an `m`-of-`n` multisig account: Hash160 of the multisig
    /// verification program over the same key set and threshold that
    /// signatures are checked against.
    pub fn from_multi_pubkeys(pubkeys: &[PublicKey], m: u16) -> CoreResult<Self> {
        Ok(Self::from_vm_code(&program::multi_sig_program(pubkeys, m)?))
    }

    /// The address of arbitrary program code.
    pub fn from_vm_code(code: &[u8]) -> Self {
        Self(hash160(code))
    }

    /// Base58Check form: version byte, the 20 address bytes and a 4-byte
    /// double-SHA256 checksum.
    pub fn to_base58(&self) -> String {
        let mut data = Vec::with_capacity(1 + ADDR_LEN + 4);
        data.push(ADDRESS_VERSION);
        data.extend_from_slice(&self.0);
        let checksum = hash256(&data);
        data.extend_from_slice(&checksum[..4]);
        bs58::encode(data).into_string()
    }

    /// Parses a Base58Check address, validating version byte and checksum.
    pub fn from_base58(text: &str) -> CoreResult<Self> {
        let data = bs58::decode(text)
            .into_vec()
            .map_err(|_| CoreError::InvalidFormat { what: "address" })?;
        if data.len() != 1 + ADDR_LEN + 4 || data[0] != ADDRESS_VERSION {
            return Err(CoreError::InvalidFormat { what: "address" });
        }
        let checksum = hash256(&data[..1 + ADDR_LEN]);
        if data[1 + ADDR_LEN..] != checksum[..4] {
            return Err(CoreError::InvalidFormat { what: "address" });
        }
        Self::from_bytes(&data[1..1 + ADDR_LEN])
    }
}

impl Serializable for Address {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        let mut bytes = [0u8; ADDR_LEN];
        bytes.copy_from_slice(reader.read_bytes(ADDR_LEN)?);
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let bytes = hex::decode(s).map_err(|_| CoreError::InvalidFormat { what: "address" })?;
        Self::from_bytes(&bytes)
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
