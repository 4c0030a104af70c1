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

use thiserror::Error;

/// Errors raised while reading wire data.
///
/// Every variant carries the byte offset at which the read went wrong, so
/// upstream layers can report where in a hostile buffer decoding stopped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    /// The buffer ended in the middle of a field.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof {
        /// Position the failed read started at.
        offset: usize,
    },

    /// A value whose encoding is not the canonical one, such as a
    /// wider-than-minimal var-uint or a boolean byte above one.
    #[error("irregular {what} encoding at offset {offset}")]
    IrregularData {
        /// The kind of field that was irregular.
        what: &'static str,
        /// Position the field started at.
        offset: usize,
    },

    /// Bytes that decode structurally but hold an invalid value.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result alias for wire reads and writes.
pub type IoResult<T> = Result<T, IoError>;
