// Copyright (C) 2023-2025 The Meridian Project.
//
// lib.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Meridian core: the transaction layer of a Meridian node.
//!
//! This crate owns the binary wire format of transactions, the signature
//! program model that turns structured signatures into on-chain invocation
//! and verification programs, and account address derivation. Every byte it
//! decodes arrives from the network or disk and is treated as hostile:
//! decoding is all-or-nothing, size-bounded up front and yields typed
//! [`CoreError`]s, never panics.
//!
//! Parsed transactions are immutable and re-serialize to their exact original
//! bytes; drafts under construction live in [`MutableTransaction`] until
//! finalized.

pub mod constants;
mod contract;
mod error;
pub mod payload;
pub mod program;
mod transaction;
mod types;

pub use contract::Contract;
pub use error::{CoreError, CoreResult};
pub use payload::{DeployCode, InvokeCode, TransactionPayload};
pub use program::ProgramInfo;
pub use transaction::{MutableTransaction, RawSig, Sig, Transaction, TransactionType};
pub use types::{Address, UInt256};
