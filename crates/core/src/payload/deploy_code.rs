// Copyright (C) 2023-2025 The Meridian Project.
//
// deploy_code.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use meridian_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

/// Payload of a deploy transaction: the contract bytecode, whether it needs
/// persistent storage, and its descriptive metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployCode {
    /// The contract bytecode.
    pub code: Vec<u8>,
    /// Whether the contract requires persistent storage.
    pub need_storage: bool,
    /// Contract name.
    pub name: String,
    /// Contract version string.
    pub version: String,
    /// Author name.
    pub author: String,
    /// Author contact.
    pub email: String,
    /// Free-form description.
    pub description: String,
}

impl Serializable for DeployCode {
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.code);
        writer.write_bool(self.need_storage);
        writer.write_var_string(&self.name);
        writer.write_var_string(&self.version);
        writer.write_var_string(&self.author);
        writer.write_var_string(&self.email);
        writer.write_var_string(&self.description);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes()?.to_vec(),
            need_storage: reader.read_bool()?,
            name: reader.read_var_string()?,
            version: reader.read_var_string()?,
            author: reader.read_var_string()?,
            email: reader.read_var_string()?,
            description: reader.read_var_string()?,
        })
    }
}
