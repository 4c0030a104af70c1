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

//! Transaction payload variants.
//!
//! The variant set is closed and keyed by the transaction type tag; payload
//! bytecode is opaque here and handed to the VM executor as-is.

mod deploy_code;
mod invoke_code;

pub use deploy_code::DeployCode;
pub use invoke_code::InvokeCode;

use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};
use crate::transaction::TransactionType;

/// The payload of a transaction, one closed variant per transaction type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionPayload {
    /// Contract invocation bytecode.
    Invoke(InvokeCode),
    /// Contract deployment bytecode plus metadata.
    Deploy(DeployCode),
}

impl TransactionPayload {
    /// The transaction type tag this payload serializes under.
    pub fn tx_type(&self) -> TransactionType {
        match self {
            Self::Invoke(_) => TransactionType::Invoke,
            Self::Deploy(_) => TransactionType::Deploy,
        }
    }

    /// The opaque bytecode handed to the VM executor.
    pub fn code(&self) -> &[u8] {
        match self {
            Self::Invoke(payload) => &payload.code,
            Self::Deploy(payload) => &payload.code,
        }
    }

    /// Serializes the payload body (the tag travels in the transaction
    /// header).
    pub fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        match self {
            Self::Invoke(payload) => payload.serialize(writer),
            Self::Deploy(payload) => payload.serialize(writer),
        }
    }

    /// Deserializes the payload body selected by `tx_type`. The reserved
    /// `Bookkeeper` tag has no payload and is rejected.
    pub fn deserialize(
        tx_type: TransactionType,
        reader: &mut MemoryReader<'_>,
    ) -> CoreResult<Self> {
        match tx_type {
            TransactionType::Invoke => {
                let payload =
                    InvokeCode::deserialize(reader).map_err(|source| CoreError::MalformedPayload {
                        kind: "invoke",
                        source,
                    })?;
                Ok(Self::Invoke(payload))
            }
            TransactionType::Deploy => {
                let payload =
                    DeployCode::deserialize(reader).map_err(|source| CoreError::MalformedPayload {
                        kind: "deploy",
                        source,
                    })?;
                Ok(Self::Deploy(payload))
            }
            TransactionType::Bookkeeper => {
                Err(CoreError::UnsupportedTxType(TransactionType::Bookkeeper as u8))
            }
        }
    }
}
