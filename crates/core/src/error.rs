// Copyright (C) 2023-2025 The Meridian Project.
//
// error.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use meridian_cryptography::CryptoError;
use meridian_io::IoError;
use thiserror::Error;

/// Errors from transaction decoding, signature-program handling and address
/// derivation.
///
/// Hostile input only ever yields one of these; decode paths never panic and
/// never hand out partially built transactions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Truncated or irregularly encoded wire data.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Invalid key material inside a program.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A protocol size bound was exceeded.
    #[error("{entity} {actual} exceeds maximum of {max}")]
    SizeExceeded {
        /// What was oversized (e.g. `"transaction"`).
        entity: &'static str,
        /// Observed value.
        actual: u64,
        /// Protocol maximum.
        max: u64,
    },

    /// Unknown or reserved transaction type tag.
    #[error("unsupported transaction type 0x{0:02x}")]
    UnsupportedTxType(u8),

    /// The attribute field did not occupy exactly one wire byte.
    #[error("transaction attribute field must encode in a single byte, got {0} bytes")]
    MalformedAttributes(usize),

    /// A signature carries no public keys.
    #[error("signature has no public keys")]
    EmptyKeySet,

    /// A multisig threshold outside `1..=n`.
    #[error("invalid multi-sig threshold {m} of {n} keys")]
    InvalidThreshold {
        /// Requested threshold.
        m: u16,
        /// Number of keys supplied.
        n: usize,
    },

    /// A program that matches neither known grammar.
    #[error("malformed program: {0}")]
    MalformedScript(&'static str),

    /// Unconsumable bytes left over after a complete parse.
    #[error("input has {0} trailing bytes")]
    TrailingBytes(usize),

    /// A program push that overruns its buffer.
    #[error("program truncated mid-push")]
    TruncatedScript,

    /// A payload body that failed to decode.
    #[error("malformed {kind} payload: {source}")]
    MalformedPayload {
        /// Payload variant name.
        kind: &'static str,
        /// Underlying wire error.
        #[source]
        source: IoError,
    },

    /// Text that does not parse as the expected value.
    #[error("invalid {what} string")]
    InvalidFormat {
        /// What was being parsed (e.g. `"address"`).
        what: &'static str,
    },
}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
