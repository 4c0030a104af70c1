// Copyright (C) 2023-2025 The Meridian Project.
//
// serializable.rs file belongs to the meridian project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization traits for Meridian wire objects.

use crate::{BinaryWriter, IoResult, MemoryReader};

/// Represents Meridian objects with a fixed wire encoding.
pub trait Serializable {
    /// Serializes the object into the specified writer.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;

    /// Deserializes an object from the specified reader.
    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self>
    where
        Self: Sized;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Converts the object to a byte array.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::new();
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Creates an object from a byte array.
    fn from_array(data: &[u8]) -> IoResult<Self>
    where
        Self: Sized,
    {
        let mut reader = MemoryReader::new(data);
        Self::deserialize(&mut reader)
    }
}

impl<T: Serializable> SerializableExt for T {}
