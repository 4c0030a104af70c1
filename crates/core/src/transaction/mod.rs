// Copyright (C) 2023-2025 The Meridian Project.
//
// mod.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The transaction entity and its codec.
//!
//! Two types split the lifecycle: [`Transaction`] is a transaction parsed
//! from canonical bytes (or finalized from a draft) and re-serializes to
//! exactly those bytes; [`MutableTransaction`] is a draft being assembled
//! for signing. The split makes the byte-echo contract a compile-time
//! property instead of a runtime assertion.

mod mutable;
mod sig;

pub use mutable::MutableTransaction;
pub use sig::{RawSig, Sig};

use std::sync::OnceLock;

use meridian_cryptography::hash256;
use meridian_io::{BinaryWriter, MemoryReader, Serializable};
use tracing::trace;

use crate::constants::{MAX_TX_SIZE, TX_MAX_SIG_SIZE};
use crate::error::{CoreError, CoreResult};
use crate::payload::TransactionPayload;
use crate::types::{Address, UInt256};

/// Transaction type tags as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransactionType {
    /// Legacy tag, reserved; no decode path accepts it.
    Bookkeeper = 0x02,
    /// Contract deployment.
    Deploy = 0xd0,
    /// Contract invocation.
    Invoke = 0xd1,
}

impl TryFrom<u8> for TransactionType {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        match value {
            0x02 => Ok(Self::Bookkeeper),
            0xd0 => Ok(Self::Deploy),
            0xd1 => Ok(Self::Invoke),
            other => Err(CoreError::UnsupportedTxType(other)),
        }
    }
}

/// A transaction parsed from its canonical bytes.
///
/// Instances only come from [`Transaction::from_raw_bytes`] /
/// [`Transaction::deserialization`] (or from
/// [`MutableTransaction::into_transaction`], which routes through them), so
/// `raw` always holds the ground-truth encoding: re-serialization echoes it
/// verbatim, byte for byte, even if field semantics evolve. To edit fields,
/// go through [`Transaction::to_mutable`].
#[derive(Debug, Clone)]
pub struct Transaction {
    version: u8,
    nonce: u32,
    gas_price: u64,
    gas_limit: u64,
    payer: Address,
    payload: TransactionPayload,
    attributes: u8,
    sigs: Vec<Sig>,
    /// Exact bytes this transaction was parsed from, signatures included.
    raw: Vec<u8>,
    /// Length of the unsigned-body prefix of `raw` (the hash preimage).
    unsigned_len: usize,
    hash: OnceLock<UInt256>,
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        // raw is canonical, so byte equality is structural equality
        self.raw == other.raw
    }
}

impl Eq for Transaction {}

impl Transaction {
    /// Decodes one transaction from a standalone buffer.
    ///
    /// The size cap is enforced before any parsing to bound work on hostile
    /// input, and the buffer must contain exactly one transaction.
    pub fn from_raw_bytes(raw: &[u8]) -> CoreResult<Self> {
        if raw.len() > MAX_TX_SIZE {
            return Err(CoreError::SizeExceeded {
                entity: "transaction",
                actual: raw.len() as u64,
                max: MAX_TX_SIZE as u64,
            });
        }
        let mut reader = MemoryReader::new(raw);
        let tx = Self::deserialization(&mut reader)?;
        if reader.remaining() > 0 {
            return Err(CoreError::TrailingBytes(reader.remaining()));
        }
        Ok(tx)
    }

    /// Decodes one transaction mid-stream (block bodies carry many), leaving
    /// the reader positioned just past it.
    ///
    /// Decoding is all-or-nothing: any sub-step failure discards everything.
    pub fn deserialization(reader: &mut MemoryReader<'_>) -> CoreResult<Self> {
        let start = reader.pos();

        let version = reader.read_byte()?;
        let tx_type = TransactionType::try_from(reader.read_byte()?)?;
        let nonce = reader.read_u32()?;
        let gas_price = reader.read_u64()?;
        let gas_limit = reader.read_u64()?;
        let payer = Address::deserialize(reader)?;
        let payload = TransactionPayload::deserialize(tx_type, reader)?;

        // the vestigial attribute-array length: one var-uint that must
        // occupy exactly one wire byte
        let attr_start = reader.pos();
        let attributes = reader.read_var_uint()?;
        let attr_size = reader.pos() - attr_start;
        if attr_size != 1 {
            return Err(CoreError::MalformedAttributes(attr_size));
        }
        let attributes = attributes as u8;

        let unsigned_len = reader.pos() - start;

        let sig_count = reader.read_var_uint()?;
        if sig_count > TX_MAX_SIG_SIZE {
            return Err(CoreError::SizeExceeded {
                entity: "signature count",
                actual: sig_count,
                max: TX_MAX_SIG_SIZE,
            });
        }
        let mut sigs = Vec::with_capacity(sig_count as usize);
        for _ in 0..sig_count {
            let raw_sig = RawSig::deserialize(reader)?;
            sigs.push(raw_sig.to_sig()?);
        }

        // re-slice the full consumed range; these bytes are the canonical
        // encoding this transaction will re-emit
        let consumed = reader.pos() - start;
        reader.back_up(consumed);
        let raw = reader.read_bytes(consumed)?.to_vec();

        trace!(size = consumed, sigs = sigs.len(), "decoded transaction");

        Ok(Self {
            version,
            nonce,
            gas_price,
            gas_limit,
            payer,
            payload,
            attributes,
            sigs,
            raw,
            unsigned_len,
            hash: OnceLock::new(),
        })
    }

    /// Transaction format version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The type tag, implied by the payload variant.
    pub fn tx_type(&self) -> TransactionType {
        self.payload.tx_type()
    }

    /// Anti-collision nonce.
    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    /// Gas price the payer offers.
    pub fn gas_price(&self) -> u64 {
        self.gas_price
    }

    /// Gas limit of the execution.
    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    /// Account that pays for the transaction.
    pub fn payer(&self) -> Address {
        self.payer
    }

    /// The payload variant.
    pub fn payload(&self) -> &TransactionPayload {
        &self.payload
    }

    /// The vestigial attribute byte.
    pub fn attributes(&self) -> u8 {
        self.attributes
    }

    /// Attached signatures, in attachment order.
    pub fn sigs(&self) -> &[Sig] {
        &self.sigs
    }

    /// The canonical bytes, signatures included.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// The unsigned-body prefix of the canonical bytes: the signing payload
    /// and hash preimage. Signatures never affect it.
    pub fn unsigned_bytes(&self) -> &[u8] {
        &self.raw[..self.unsigned_len]
    }

    /// The transaction identity: double SHA-256 over the unsigned body,
    /// computed on first use and memoized. Concurrent first calls are safe.
    pub fn hash(&self) -> UInt256 {
        *self
            .hash
            .get_or_init(|| UInt256::from(hash256(self.unsigned_bytes())))
    }

    /// Emits the canonical bytes verbatim.
    pub fn serialization(&self, writer: &mut BinaryWriter) {
        writer.write_bytes(&self.raw);
    }

    /// The canonical bytes as an owned buffer.
    pub fn to_array(&self) -> Vec<u8> {
        self.raw.clone()
    }

    /// An editable copy of the fields and signatures, detached from the
    /// canonical bytes and cached hash.
    pub fn to_mutable(&self) -> MutableTransaction {
        MutableTransaction {
            version: self.version,
            nonce: self.nonce,
            gas_price: self.gas_price,
            gas_limit: self.gas_limit,
            payer: self.payer,
            payload: self.payload.clone(),
            attributes: self.attributes,
            sigs: self.sigs.clone(),
        }
    }

    /// The authorizing address of each attached signature, in order.
    pub fn sig_addresses(&self) -> CoreResult<Vec<Address>> {
        self.sigs.iter().map(Sig::address).collect()
    }
}
