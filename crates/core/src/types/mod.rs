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

//! Fixed-size value types of the protocol.

mod address;
mod uint256;

pub use address::Address;
pub use uint256::UInt256;
