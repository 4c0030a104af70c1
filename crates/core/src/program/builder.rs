// Copyright (C) 2023-2025 The Meridian Project.
//
// builder.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use meridian_cryptography::PublicKey;
use meridian_io::BinaryWriter;

use super::opcode;
use crate::constants::MULTI_SIG_MAX_PUBKEY_SIZE;
use crate::error::{CoreError, CoreResult};

/// Incrementally assembles a program from data pushes and opcodes, always
/// choosing the shortest push form for the data length.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    writer: BinaryWriter,
}

impl ProgramBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bare opcode.
    pub fn push_opcode(&mut self, op: u8) -> &mut Self {
        self.writer.write_byte(op);
        self
    }

    /// Appends a data push. `data` must not be empty; the protocol has no
    /// empty signature or key values.
    pub fn push_bytes(&mut self, data: &[u8]) -> &mut Self {
        debug_assert!(!data.is_empty(), "empty push has no shortest form");
        if data.len() <= opcode::PUSHBYTES75 as usize {
            self.writer.write_byte(data.len() as u8);
        } else if data.len() < 0x100 {
            self.writer.write_byte(opcode::PUSHDATA1);
            self.writer.write_byte(data.len() as u8);
        } else if data.len() < 0x10000 {
            self.writer.write_byte(opcode::PUSHDATA2);
            self.writer.write_u16(data.len() as u16);
        } else {
            self.writer.write_byte(opcode::PUSHDATA4);
            self.writer.write_u32(data.len() as u32);
        }
        self.writer.write_bytes(data);
        self
    }

    /// Appends a small non-negative integer: `PUSH0`/`PUSH1..PUSH16` for
    /// values up to 16, a minimal signed little-endian integer push above.
    pub fn push_num(&mut self, num: u16) -> &mut Self {
        if num == 0 {
            self.push_opcode(opcode::PUSH0)
        } else if num <= 16 {
            self.push_opcode(opcode::PUSH1 + num as u8 - 1)
        } else {
            self.push_bytes(&minimal_int_bytes(num))
        }
    }

    /// Appends a public key as a 33-byte data push.
    pub fn push_pubkey(&mut self, key: &PublicKey) -> &mut Self {
        self.push_bytes(&key.to_bytes())
    }

    /// The finished program bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }
}

/// Minimal little-endian signed encoding of a positive integer, as the VM
/// represents numbers: trailing zero bytes stripped, one re-appended when the
/// top bit would read as a sign.
fn minimal_int_bytes(num: u16) -> Vec<u8> {
    let mut bytes = num.to_le_bytes().to_vec();
    while bytes.len() > 1 && bytes[bytes.len() - 1] == 0 {
        bytes.pop();
    }
    if bytes[bytes.len() - 1] & 0x80 != 0 {
        bytes.push(0);
    }
    bytes
}

/// Builds the verification program of a single-key account: push the key,
/// `CHECKSIG`.
pub fn signature_program(pubkey: &PublicKey) -> Vec<u8> {
    let mut builder = ProgramBuilder::new();
    builder.push_pubkey(pubkey).push_opcode(opcode::CHECKSIG);
    builder.into_bytes()
}

/// Builds the verification program of an `m`-of-`n` multisig account: push
/// `m`, the key set in canonical (compressed-encoding) order, `n`, then
/// `CHECKMULTISIG`.
pub fn multi_sig_program(pubkeys: &[PublicKey], m: u16) -> CoreResult<Vec<u8>> {
    let n = pubkeys.len();
    if n == 0 {
        return Err(CoreError::EmptyKeySet);
    }
    if n > MULTI_SIG_MAX_PUBKEY_SIZE {
        return Err(CoreError::SizeExceeded {
            entity: "multi-sig key set",
            actual: n as u64,
            max: MULTI_SIG_MAX_PUBKEY_SIZE as u64,
        });
    }
    if m < 1 || m as usize > n {
        return Err(CoreError::InvalidThreshold { m, n });
    }

    let mut sorted: Vec<&PublicKey> = pubkeys.iter().collect();
    sorted.sort();

    let mut builder = ProgramBuilder::new();
    builder.push_num(m);
    for key in sorted {
        builder.push_pubkey(key);
    }
    builder.push_num(n as u16);
    builder.push_opcode(opcode::CHECKMULTISIG);
    Ok(builder.into_bytes())
}

/// Builds an invocation program: one data push per signature value, in the
/// order the signers supplied them.
pub fn invocation_program(sig_data: &[Vec<u8>]) -> CoreResult<Vec<u8>> {
    let mut builder = ProgramBuilder::new();
    for sig in sig_data {
        if sig.is_empty() {
            return Err(CoreError::MalformedScript("empty signature value"));
        }
        builder.push_bytes(sig);
    }
    Ok(builder.into_bytes())
}
