// Copyright (C) 2023-2025 The Meridian Project.
//
// invoke_code.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Payload of an invoke transaction: bytecode for the VM, opaque to the
/// codec beyond its length-prefix framing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeCode {
    /// The bytecode to execute.
    pub code: Vec<u8>,
}

impl Serializable for InvokeCode {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.code);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes()?.to_vec(),
        })
    }
}
