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

//! Meridian.IO - wire-format primitives for the Meridian protocol.
//!
//! Everything on the Meridian wire is built from the little-endian integers,
//! var-uints and length-prefixed byte strings provided here. [`MemoryReader`]
//! borrows the input buffer and hands out views into it; [`BinaryWriter`] is
//! a pure accumulator whose writes cannot fail.

mod binary_writer;
mod error;
mod memory_reader;
mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::{Serializable, SerializableExt};
