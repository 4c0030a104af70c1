// Copyright (C) 2023-2025 The Meridian Project.
//
// parser.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use meridian_cryptography::PublicKey;
use meridian_io::MemoryReader;

use super::opcode;
use crate::constants::MULTI_SIG_MAX_PUBKEY_SIZE;
use crate::error::{CoreError, CoreResult};

/// The key set and threshold recovered from a verification program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    /// Signature threshold (1 for a single-key program).
    pub m: u16,
    /// Public keys in program order.
    pub pub_keys: Vec<PublicKey>,
}

/// Integer pushes inside programs span at most 3 bytes (values up to u16);
/// key pushes are at least 33. The gap makes the multisig grammar
/// unambiguous.
const INT_PUSH_MAX: u8 = 3;

struct ProgramParser<'a> {
    reader: MemoryReader<'a>,
}

impl<'a> ProgramParser<'a> {
    fn new(program: &'a [u8]) -> Self {
        Self {
            reader: MemoryReader::new(program),
        }
    }

    fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    fn peek_opcode(&self) -> CoreResult<u8> {
        self.reader.peek().map_err(|_| CoreError::TruncatedScript)
    }

    /// Reads one data push (`PUSHBYTES1..75` or `PUSHDATA1/2/4`) and returns
    /// a view of its payload.
    fn read_push_data(&mut self) -> CoreResult<&'a [u8]> {
        let op = self
            .reader
            .read_byte()
            .map_err(|_| CoreError::TruncatedScript)?;
        let length = match op {
            opcode::PUSHDATA1 => {
                self.reader
                    .read_byte()
                    .map_err(|_| CoreError::TruncatedScript)? as usize
            }
            opcode::PUSHDATA2 => {
                self.reader
                    .read_u16()
                    .map_err(|_| CoreError::TruncatedScript)? as usize
            }
            opcode::PUSHDATA4 => {
                self.reader
                    .read_u32()
                    .map_err(|_| CoreError::TruncatedScript)? as usize
            }
            op if (opcode::PUSHBYTES1..=opcode::PUSHBYTES75).contains(&op) => op as usize,
            _ => return Err(CoreError::MalformedScript("expected a data push")),
        };
        self.reader
            .read_bytes(length)
            .map_err(|_| CoreError::TruncatedScript)
    }

    /// Reads a small integer: a `PUSH0`/`PUSH1..PUSH16` opcode or a minimal
    /// signed little-endian integer push.
    fn read_num(&mut self) -> CoreResult<u16> {
        let op = self.peek_opcode()?;
        if op == opcode::PUSH0 {
            self.read_opcode()?;
            return Ok(0);
        }
        if (opcode::PUSH1..=opcode::PUSH16).contains(&op) {
            self.read_opcode()?;
            return Ok(u16::from(op - opcode::PUSH1) + 1);
        }
        let data = self.read_push_data()?;
        decode_minimal_int(data)
    }

    fn read_opcode(&mut self) -> CoreResult<u8> {
        self.reader
            .read_byte()
            .map_err(|_| CoreError::TruncatedScript)
    }
}

/// Decodes a minimal signed little-endian integer push in `(16, u16::MAX]`;
/// values up to 16 have opcode forms and must use them.
fn decode_minimal_int(data: &[u8]) -> CoreResult<u16> {
    if data.is_empty() || data.len() > INT_PUSH_MAX as usize {
        return Err(CoreError::MalformedScript("bad integer push length"));
    }
    if data[data.len() - 1] & 0x80 != 0 {
        return Err(CoreError::MalformedScript("negative integer push"));
    }
    if data.len() > 1 && data[data.len() - 1] == 0 && data[data.len() - 2] & 0x80 == 0 {
        return Err(CoreError::MalformedScript("non-minimal integer push"));
    }
    let mut value: u32 = 0;
    for (i, byte) in data.iter().enumerate() {
        value |= u32::from(*byte) << (8 * i);
    }
    if value <= 16 || value > u32::from(u16::MAX) {
        return Err(CoreError::MalformedScript("integer push out of range"));
    }
    Ok(value as u16)
}

fn is_data_push(op: u8) -> bool {
    (opcode::PUSHBYTES1..=opcode::PUSHDATA4).contains(&op)
}

/// Parses an invocation program into its ordered signature values.
pub fn parse_invocation_program(program: &[u8]) -> CoreResult<Vec<Vec<u8>>> {
    let mut parser = ProgramParser::new(program);
    let mut params = Vec::new();
    while parser.remaining() > 0 {
        if !is_data_push(parser.peek_opcode()?) {
            return Err(CoreError::TrailingBytes(parser.remaining()));
        }
        params.push(parser.read_push_data()?.to_vec());
    }
    Ok(params)
}

/// Parses a verification program, which must match exactly one of the two
/// known grammars: a single-key program (`push key, CHECKSIG`) or a multisig
/// program (`push m, keys.., push n, CHECKMULTISIG`).
pub fn parse_verification_program(program: &[u8]) -> CoreResult<ProgramInfo> {
    if program.len() <= 2 {
        return Err(CoreError::MalformedScript("program too short"));
    }
    let (body, tail) = program.split_at(program.len() - 1);
    match tail[0] {
        opcode::CHECKSIG => {
            let mut parser = ProgramParser::new(body);
            let key = parser.read_push_data()?;
            if parser.remaining() > 0 {
                return Err(CoreError::TrailingBytes(parser.remaining()));
            }
            Ok(ProgramInfo {
                m: 1,
                pub_keys: vec![PublicKey::from_bytes(key)?],
            })
        }
        opcode::CHECKMULTISIG => {
            let mut parser = ProgramParser::new(body);
            let m = parser.read_num()?;
            let mut pub_keys = Vec::new();
            loop {
                let op = parser.peek_opcode().map_err(|_| {
                    CoreError::MalformedScript("multi-sig program ends before key count")
                })?;
                // the trailing key count is an opcode or a short integer
                // push; keys are 33-byte pushes
                if op == opcode::PUSH0
                    || (opcode::PUSH1..=opcode::PUSH16).contains(&op)
                    || (opcode::PUSHBYTES1..=INT_PUSH_MAX).contains(&op)
                {
                    break;
                }
                let key = parser.read_push_data()?;
                pub_keys.push(PublicKey::from_bytes(key)?);
            }
            let n = parser.read_num()?;
            if parser.remaining() > 0 {
                return Err(CoreError::TrailingBytes(parser.remaining()));
            }
            if usize::from(n) != pub_keys.len() {
                return Err(CoreError::MalformedScript("key count mismatch"));
            }
            if pub_keys.len() > MULTI_SIG_MAX_PUBKEY_SIZE {
                return Err(CoreError::MalformedScript("too many keys"));
            }
            if m < 1 || m > n {
                return Err(CoreError::MalformedScript("threshold out of range"));
            }
            Ok(ProgramInfo { m, pub_keys })
        }
        _ => Err(CoreError::MalformedScript("unknown verification opcode")),
    }
}
