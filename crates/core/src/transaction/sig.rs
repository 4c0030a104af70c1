// Copyright (C) 2023-2025 The Meridian Project.
//
// sig.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Structured and wire views of a transaction signature.

use meridian_cryptography::PublicKey;
use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};
use crate::program;
use crate::types::Address;

/// A structured authorization: raw signature values, the authorizing key set
/// and the multisig threshold (`m == 1` with a single key).
///
/// `sig_data` order is the order signers produced their signatures and is
/// preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sig {
    /// One signature value per signer, in signing order.
    pub sig_data: Vec<Vec<u8>>,
    /// The key set this authorization answers for.
    pub pub_keys: Vec<PublicKey>,
    /// Signature threshold.
    pub m: u16,
}

impl Sig {
    /// Single-key authorization over one signature value.
    pub fn single(signature: Vec<u8>, pub_key: PublicKey) -> Self {
        Self {
            sig_data: vec![signature],
            pub_keys: vec![pub_key],
            m: 1,
        }
    }

    /// Converts to wire form, building the invocation and verification
    /// programs.
    pub fn to_raw(&self) -> CoreResult<RawSig> {
        if self.pub_keys.is_empty() {
            return Err(CoreError::EmptyKeySet);
        }
        let verify = if self.pub_keys.len() == 1 {
            program::signature_program(&self.pub_keys[0])
        } else {
            program::multi_sig_program(&self.pub_keys, self.m)?
        };
        let invoke = program::invocation_program(&self.sig_data)?;
        Ok(RawSig { invoke, verify })
    }

    /// The account address this signature authorizes for.
    pub fn address(&self) -> CoreResult<Address> {
        if self.pub_keys.is_empty() {
            Err(CoreError::EmptyKeySet)
        } else if self.pub_keys.len() == 1 {
            Ok(Address::from_pubkey(&self.pub_keys[0]))
        } else {
            Address::from_multi_pubkeys(&self.pub_keys, self.m)
        }
    }
}

/// The wire form of an authorization: an invocation program carrying the
/// signature values and a verification program carrying the key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSig {
    /// Invocation program bytes.
    pub invoke: Vec<u8>,
    /// Verification program bytes.
    pub verify: Vec<u8>,
}

impl RawSig {
    /// Parses both programs back into structured form. Fails with a typed
    /// decode error when the verification program matches neither known
    /// grammar; nothing is ever silently coerced.
    pub fn to_sig(&self) -> CoreResult<Sig> {
        let sig_data = program::parse_invocation_program(&self.invoke)?;
        let info = program::parse_verification_program(&self.verify)?;
        Ok(Sig {
            sig_data,
            pub_keys: info.pub_keys,
            m: info.m,
        })
    }
}

impl Serializable for RawSig {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invoke);
        writer.write_var_bytes(&self.verify);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            invoke: reader.read_var_bytes()?.to_vec(),
            verify: reader.read_var_bytes()?.to_vec(),
        })
    }
}
