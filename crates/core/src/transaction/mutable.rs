// Copyright (C) 2023-2025 The Meridian Project.
//
// mutable.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Draft transactions being assembled for signing.

use meridian_cryptography::hash256;
use meridian_io::{BinaryWriter, Serializable};

use super::{Sig, Transaction};
use crate::constants::TX_MAX_SIG_SIZE;
use crate::error::{CoreError, CoreResult};
use crate::payload::{DeployCode, InvokeCode, TransactionPayload};
use crate::transaction::TransactionType;
use crate::types::{Address, UInt256};

/// A transaction under construction.
///
/// Fields are freely editable and signatures can be attached; nothing is
/// canonical until [`MutableTransaction::into_transaction`] derives the
/// final bytes. A signer takes [`encode_unsigned`] as the signing payload,
/// builds a [`Sig`] and attaches it with [`push_sig`].
///
/// [`encode_unsigned`]: MutableTransaction::encode_unsigned
/// [`push_sig`]: MutableTransaction::push_sig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutableTransaction {
    /// Transaction format version.
    pub version: u8,
    /// Anti-collision nonce.
    pub nonce: u32,
    /// Gas price the payer offers.
    pub gas_price: u64,
    /// Gas limit of the execution.
    pub gas_limit: u64,
    /// Account that pays for the transaction.
    pub payer: Address,
    /// The payload variant; also determines the type tag.
    pub payload: TransactionPayload,
    /// The vestigial attribute byte, 0 in practice.
    pub attributes: u8,
    /// Signatures attached so far, in attachment order.
    pub sigs: Vec<Sig>,
}

impl MutableTransaction {
    /// Creates an empty draft around `payload` with a fresh random nonce.
    pub fn new(payload: TransactionPayload) -> Self {
        Self {
            version: 0,
            nonce: rand::random(),
            gas_price: 0,
            gas_limit: 0,
            payer: Address::ZERO,
            payload,
            attributes: 0,
            sigs: Vec::new(),
        }
    }

    /// Draft invoke transaction around `code`.
    pub fn new_invoke(gas_price: u64, gas_limit: u64, code: Vec<u8>) -> Self {
        let mut tx = Self::new(TransactionPayload::Invoke(InvokeCode { code }));
        tx.gas_price = gas_price;
        tx.gas_limit = gas_limit;
        tx
    }

    /// Draft deploy transaction around `deploy`.
    pub fn new_deploy(gas_price: u64, gas_limit: u64, deploy: DeployCode) -> Self {
        let mut tx = Self::new(TransactionPayload::Deploy(deploy));
        tx.gas_price = gas_price;
        tx.gas_limit = gas_limit;
        tx
    }

    /// The type tag implied by the payload.
    pub fn tx_type(&self) -> TransactionType {
        self.payload.tx_type()
    }

    /// Serializes the unsigned body. This encoding is byte-stable: it is
    /// both the signing payload and the hash preimage of the finalized
    /// transaction.
    pub fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> CoreResult<()> {
        // the attribute field must stay a single wire byte
        if u64::from(self.attributes) >= 0xfd {
            return Err(CoreError::MalformedAttributes(3));
        }
        writer.write_byte(self.version);
        writer.write_byte(self.payload.tx_type() as u8);
        writer.write_u32(self.nonce);
        writer.write_u64(self.gas_price);
        writer.write_u64(self.gas_limit);
        self.payer.serialize(writer)?;
        self.payload.serialize(writer)?;
        writer.write_var_uint(u64::from(self.attributes));
        Ok(())
    }

    /// The unsigned body as owned bytes.
    pub fn encode_unsigned(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// The identity this draft will have once finalized: double SHA-256 over
    /// the unsigned body.
    pub fn hash(&self) -> CoreResult<UInt256> {
        Ok(UInt256::from(hash256(&self.encode_unsigned()?)))
    }

    /// Appends a signature. Order is significant and preserved on the wire.
    pub fn push_sig(&mut self, sig: Sig) {
        self.sigs.push(sig);
    }

    /// Finalizes the draft: encodes the unsigned body plus the signature
    /// list, then re-parses the result so the canonical bytes are derived
    /// exactly once, after signing.
    pub fn into_transaction(self) -> CoreResult<Transaction> {
        if self.sigs.len() as u64 > TX_MAX_SIG_SIZE {
            return Err(CoreError::SizeExceeded {
                entity: "signature count",
                actual: self.sigs.len() as u64,
                max: TX_MAX_SIG_SIZE,
            });
        }
        let mut writer = BinaryWriter::new();
        self.serialize_unsigned(&mut writer)?;
        writer.write_var_uint(self.sigs.len() as u64);
        for sig in &self.sigs {
            sig.to_raw()?.serialize(&mut writer)?;
        }
        Transaction::from_raw_bytes(writer.as_bytes())
    }
}
