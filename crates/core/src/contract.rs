// Copyright (C) 2023-2025 The Meridian Project.
//
// contract.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Invoke-target state: which contract to call and with what.

use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::types::Address;

/// The conventional content of an invoke payload's bytecode: the target
/// contract address, the method to call and its pre-encoded arguments.
///
/// The transaction codec treats invoke bytecode as opaque; this struct is for
/// callers assembling or inspecting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    /// Invocation format version, 0 today.
    pub version: u8,
    /// Address of the contract being called.
    pub address: Address,
    /// Method name, empty for the default entry point.
    pub method: String,
    /// VM-encoded arguments.
    pub args: Vec<u8>,
}

impl Serializable for Contract {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_byte(self.version);
        self.address.serialize(writer)?;
        writer.write_var_string(&self.method);
        writer.write_var_bytes(&self.args);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            version: reader.read_byte()?,
            address: Address::deserialize(reader)?,
            method: reader.read_var_string()?,
            args: reader.read_var_bytes()?.to_vec(),
        })
    }
}
